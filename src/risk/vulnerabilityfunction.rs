use std::collections::BTreeMap;
use std::fmt;
use std::vec;

use serde::{
    de,
    ser::SerializeMap,
    Deserialize,
    Serialize
};

use crate::math::curve::linearinterpolation::{
    interpolate,
    interpolate_all
};
use crate::shapeerror::{
    check_domain,
    check_length,
    check_strictly_ascending,
    Field,
    ShapeError
};

// ─────────────────────────────────────────────
// IML keys
// ─────────────────────────────────────────────

/// Key of a serialized vulnerability function: either a number or its
/// decimal text. Only the numeric value matters.
pub trait IntoIml {
    fn into_iml(self) -> Result<f64, ShapeError>;
}

impl IntoIml for f64 {
    fn into_iml(self) -> Result<f64, ShapeError> {
        Ok(self)
    }
}

impl IntoIml for &str {
    fn into_iml(self) -> Result<f64, ShapeError> {
        self.trim()
            .parse::<f64>()
            .map_err(|_| ShapeError::MalformedIml(self.to_owned()))
    }
}

impl IntoIml for String {
    fn into_iml(self) -> Result<f64, ShapeError> {
        self.as_str().into_iml()
    }
}

impl IntoIml for &String {
    fn into_iml(self) -> Result<f64, ShapeError> {
        self.as_str().into_iml()
    }
}

/// Entries of a serialized mapping in document order.
///
/// A repeated key is kept as a separate entry, so it reaches the ascending
/// check and is reported as a duplicate instead of silently replacing the
/// earlier value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImlEntries(Vec<(String, [f64; 2])>);

impl ImlEntries {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ImlEntries {
    type Item = (String, [f64; 2]);
    type IntoIter = vec::IntoIter<(String, [f64; 2])>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'de> Deserialize<'de> for ImlEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct ImlEntriesVisitor;

        impl<'de> de::Visitor<'de> for ImlEntriesVisitor {
            type Value = ImlEntries;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of IML to [loss_ratio, cov]")
            }

            fn visit_map<A>(self, mut map: A) -> Result<ImlEntries, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, [f64; 2]>()? {
                    entries.push(entry);
                }
                Ok(ImlEntries(entries))
            }
        }

        deserializer.deserialize_map(ImlEntriesVisitor)
    }
}

// ─────────────────────────────────────────────
// VulnerabilityFunction
// ─────────────────────────────────────────────

/// Loss ratio and coefficient of variation as functions of intensity
/// measure level.
///
/// The three sequences are parallel: `loss_ratios[i]` and `covs[i]` belong
/// to `imls[i]`. Lookups clip the requested IML to `[imls[0], imls[n - 1]]`
/// and interpolate linearly, so they never extrapolate.
///
/// An empty function (no IMLs at all) is valid; its lookups return `NaN`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VulnerabilityFunction {
    imls: Vec<f64>,
    loss_ratios: Vec<f64>,
    covs: Vec<f64>,
}

impl VulnerabilityFunction {
    /// Validates and builds a function.
    ///
    /// Checks run in this order: IMLs strictly ascending, finite and
    /// non-negative, loss ratios of matching length within `[0, 1]`, CoVs of
    /// matching length, finite and non-negative. The first violation is
    /// returned.
    pub fn new(
        imls: Vec<f64>,
        loss_ratios: Vec<f64>,
        covs: Vec<f64>,
    ) -> Result<VulnerabilityFunction, ShapeError> {
        Self::validate(&imls, &loss_ratios, &covs).inspect_err(|err| {
            tracing::debug!(error = %err, "rejecting vulnerability function");
        })?;
        Ok(VulnerabilityFunction { imls, loss_ratios, covs })
    }

    fn validate(imls: &[f64], loss_ratios: &[f64], covs: &[f64]) -> Result<(), ShapeError> {
        check_strictly_ascending(imls, Field::Imls)?;
        check_domain(imls, Field::Imls, "[0, f64::MAX]", |v| v.is_finite() && v >= 0.0)?;

        check_length(loss_ratios, imls.len(), Field::LossRatios)?;
        check_domain(loss_ratios, Field::LossRatios, "[0, 1]", |v| (0.0..=1.0).contains(&v))?;

        check_length(covs, imls.len(), Field::Covs)?;
        check_domain(covs, Field::Covs, "[0, f64::MAX]", |v| v.is_finite() && v >= 0.0)?;
        Ok(())
    }

    pub fn imls(&self) -> &[f64] {
        &self.imls
    }

    pub fn loss_ratios(&self) -> &[f64] {
        &self.loss_ratios
    }

    pub fn covs(&self) -> &[f64] {
        &self.covs
    }

    pub fn len(&self) -> usize {
        self.imls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imls.is_empty()
    }

    pub fn loss_ratio_for(&self, iml: f64) -> f64 {
        interpolate(iml, &self.imls, &self.loss_ratios)
    }

    pub fn loss_ratios_for(&self, imls: &[f64]) -> Vec<f64> {
        interpolate_all(imls, &self.imls, &self.loss_ratios)
    }

    pub fn cov_for(&self, iml: f64) -> f64 {
        interpolate(iml, &self.imls, &self.covs)
    }

    pub fn covs_for(&self, imls: &[f64]) -> Vec<f64> {
        interpolate_all(imls, &self.imls, &self.covs)
    }

    /// `(iml, loss_ratio, cov)` triples in ascending IML order.
    pub fn iter(&self) -> VulnerabilityFunctionIter<'_> {
        VulnerabilityFunctionIter { function: self, current: 0 }
    }

    // ─────────────────────────────────────────
    // Mapping / JSON form: {"<iml>": [loss_ratio, cov], ...}
    // ─────────────────────────────────────────

    /// Builds a function from an unordered IML mapping. Entries are sorted by
    /// numeric IML before validation; two keys with the same numeric value
    /// are reported as duplicates.
    pub fn from_dict<K, I>(dict: I) -> Result<VulnerabilityFunction, ShapeError>
    where
        K: IntoIml,
        I: IntoIterator<Item = (K, [f64; 2])>,
    {
        let mut entries = dict
            .into_iter()
            .map(|(key, [loss_ratio, cov])| -> Result<(f64, f64, f64), ShapeError> {
                Ok((key.into_iml()?, loss_ratio, cov))
            })
            .collect::<Result<Vec<(f64, f64, f64)>, ShapeError>>()?;
        entries.sort_by(|lhs, rhs| lhs.0.total_cmp(&rhs.0));

        let mut imls = Vec::with_capacity(entries.len());
        let mut loss_ratios = Vec::with_capacity(entries.len());
        let mut covs = Vec::with_capacity(entries.len());
        for (iml, loss_ratio, cov) in entries {
            imls.push(iml);
            loss_ratios.push(loss_ratio);
            covs.push(cov);
        }
        Self::new(imls, loss_ratios, covs)
    }

    /// Mapping form keyed by the shortest decimal text of each IML.
    pub fn to_dict(&self) -> BTreeMap<String, [f64; 2]> {
        self.iter()
            .map(|(iml, loss_ratio, cov)| (iml.to_string(), [loss_ratio, cov]))
            .collect()
    }

    pub fn from_json(json: &str) -> Result<VulnerabilityFunction, ShapeError> {
        let entries: ImlEntries = serde_json::from_str(json)?;
        let function = Self::from_dict(entries)?;
        tracing::debug!(imls = function.len(), "loaded vulnerability function from JSON");
        Ok(function)
    }

    pub fn to_json(&self) -> Result<String, ShapeError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'a> IntoIterator for &'a VulnerabilityFunction {
    type Item = (f64, f64, f64);
    type IntoIter = VulnerabilityFunctionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(iml, loss_ratio, cov)` triples of a function.
#[derive(Debug, Clone)]
pub struct VulnerabilityFunctionIter<'a> {
    function: &'a VulnerabilityFunction,
    current: usize,
}

impl<'a> Iterator for VulnerabilityFunctionIter<'a> {
    type Item = (f64, f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.current;
        let f = self.function;
        if i >= f.imls.len() {
            return None;
        }
        self.current += 1;
        Some((f.imls[i], f.loss_ratios[i], f.covs[i]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.function.imls.len().saturating_sub(self.current);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VulnerabilityFunctionIter<'_> {}

impl Serialize for VulnerabilityFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (iml, loss_ratio, cov) in self.iter() {
            map.serialize_entry(&iml.to_string(), &[loss_ratio, cov])?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VulnerabilityFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let entries = ImlEntries::deserialize(deserializer)?;
        VulnerabilityFunction::from_dict(entries).map_err(de::Error::custom)
    }
}

impl fmt::Display for VulnerabilityFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VulnerabilityFunction(")?;
        for (i, (iml, loss_ratio, cov)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: [{}, {}]", iml, loss_ratio, cov)?;
        }
        write!(f, ")")
    }
}
