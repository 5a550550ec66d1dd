use crate::cli::Args;
use crate::geo::models::LatLng;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

pub mod resolver;

/// Where panorama lookups draw their answers from.
#[derive(Clone, Debug)]
pub enum LocationPool {
    /// Points known to have street-level imagery.
    Known(Vec<LatLng>),
    /// Any point on the globe.
    Anywhere,
}

#[derive(Debug, Error)]
pub enum LocationsError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line} of the locations file is not a valid location: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    #[error("the locations file contains no locations")]
    Empty,
}

impl LocationPool {
    pub fn init(args: &Args) -> Result<Self, LocationsError> {
        let pool = match &args.locations {
            Some(path) => Self::from_file(path)?,
            None => Self::Anywhere,
        };
        match &pool {
            Self::Known(locations) => {
                tracing::info!("Loaded {} known locations.", locations.len())
            }
            Self::Anywhere => tracing::info!("No locations file given, sampling the whole globe."),
        }
        Ok(pool)
    }

    pub fn from_file(path: &Path) -> Result<Self, LocationsError> {
        let file_reader = BufReader::new(File::open(path)?);
        let mut locations = Vec::new();
        for (index, line) in file_reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let location: LatLng =
                serde_json::from_str(&line).map_err(|source| LocationsError::Parse {
                    line: index + 1,
                    source,
                })?;
            locations.push(location);
        }
        if locations.is_empty() {
            return Err(LocationsError::Empty);
        }
        Ok(Self::Known(locations))
    }

    pub fn pick(&self) -> Option<LatLng> {
        let mut rng = rand::thread_rng();
        match self {
            Self::Known(locations) => locations.choose(&mut rng).copied(),
            Self::Anywhere => {
                let lat = rng.gen_range(-90.0..=90.0);
                let lng = rng.gen_range(-180.0..=180.0);
                LatLng::new(lat, lng).ok()
            }
        }
    }
}
