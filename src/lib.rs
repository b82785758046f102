pub mod configuration;
pub mod configurationerror;

pub mod geo {
    pub mod site;
    pub mod region;
}

pub mod math {
    pub mod curve {
        pub mod point2d;
        pub mod linearinterpolation;
        pub mod curve;
    }
    pub mod rangeclip;
    pub mod round;
}

pub mod risk {
    pub mod vulnerabilityfunction;
    pub mod vulnerabilitymodel;
}

pub mod shapeerror;
