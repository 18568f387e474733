use std::time::Duration;

use geo::Point;
use log::info;

use super::catalog::{CatalogAttraction, CatalogWalkway, deserialize_catalog_file};
use super::config::ParkModelConfig;
use crate::model::{ParkGraph, ParkModel, ParkModelMeta};
use crate::Error;

/// Creates a park model based on the provided configuration
///
/// # Errors
///
/// Returns [`Error::InvalidCatalog`] for missing files, malformed rows, or
/// an inconsistent topology. All of these abort startup; nothing here is
/// recoverable at request time.
pub fn create_park_model(config: &ParkModelConfig) -> Result<ParkModel, Error> {
    validate_config(config)?;

    info!(
        "Loading park catalog: {} / {}",
        config.attractions_path.display(),
        config.walkways_path.display()
    );

    let attractions: Vec<CatalogAttraction> =
        deserialize_catalog_file(&config.attractions_path)?;
    let walkways: Vec<CatalogWalkway> = deserialize_catalog_file(&config.walkways_path)?;

    let graph = ParkGraph::from_parts(
        attractions
            .into_iter()
            .map(|row| (row.name, Point::new(row.x, row.y)))
            .collect(),
        walkways
            .into_iter()
            .map(|row| (row.from, row.to, row.walk_minutes))
            .collect(),
    )?;

    info!(
        "Park model created: {} attractions, {} walkways",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(ParkModel::new(
        graph,
        ParkModelMeta {
            default_wait: config.default_wait,
            feed_ttl: Duration::from_secs(config.feed_ttl_seconds),
        },
    ))
}

fn validate_config(config: &ParkModelConfig) -> Result<(), Error> {
    for path in [&config.attractions_path, &config.walkways_path] {
        if !path.exists() {
            return Err(Error::InvalidCatalog(format!(
                "catalog file not found: {}",
                path.display()
            )));
        }
    }
    // The telemetry file may appear later; its absence degrades to default
    // waits instead of failing startup
    Ok(())
}
