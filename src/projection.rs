//! Reference systems

use crate::error::{Error, Result};

use proj4rs::proj::Proj;

use std::fmt;

/// A validated PROJ.4 reference system definition
///
/// Two projections are equal when their definitions match, ignoring
///   whitespace
pub struct Projection {
    params: String,
    geographic: bool,
    proj: Proj,
}

impl Projection {
    /// Parse a PROJ.4 definition such as `+proj=longlat +datum=WGS84`
    ///
    ///     use mapcore::Projection;
    ///
    ///     let p = Projection::new("+proj=longlat +ellps=WGS84 +no_defs").unwrap();
    ///     assert!(p.is_geographic());
    ///     assert!(Projection::new("+proj=nonsense").is_err());
    ///
    pub fn new(params: &str) -> Result<Self> {
        let params = params.split_whitespace().collect::<Vec<_>>().join(" ");
        let proj = Proj::from_proj_string(&params).map_err(|e| Error::InvalidProjection {
            params: params.clone(),
            reason: e.to_string(),
        })?;
        let geographic = proj.is_latlong();
        log::debug!("projection `{}` geographic={}", params, geographic);
        Ok(Self { params, geographic, proj })
    }
    /// Coordinates are longitude and latitude
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }
    /// Normalized definition
    pub fn params(&self) -> &str {
        &self.params
    }
    pub(crate) fn proj(&self) -> &Proj {
        &self.proj
    }
}

impl PartialEq for Projection {
    fn eq(&self, other: &Projection) -> bool {
        self.params == other.params
    }
}

impl fmt::Debug for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("params", &self.params)
            .field("geographic", &self.geographic)
            .finish()
    }
}
