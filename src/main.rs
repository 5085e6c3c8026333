use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use mapsketch::config::FileConfig;
use mapsketch::geometry::projection::{
    lonlat_to_web_mercator, point_resolution, web_mercator_to_lonlat,
};
use mapsketch::measure::{ScaleBar, ScaleUnits, format_xy, round_area, total_area};
use mapsketch::shapes::{ShapeKind, StarShape, draft_shape};
use mapsketch::{Degrees, ModelOrigin, Outline, Point2D, translate_and_rotate};

/// Shape, projection and measurement helpers for interactive map drawing
///
/// Points are written as "x,y" (or "lon,lat").
///
/// Examples:
///   # Translate (10,10) by (5000,3000) then rotate 45 degrees about the origin
///   mapsketch transform 10,10 --dx 5000 --dy 3000 --angle 45
///
///   # Star outline dragged from a center to a cursor
///   mapsketch shape star --center 0,0 --cursor 100,50
///
///   # Meters east/north of a model origin
///   mapsketch offset --origin 11.5257,47.668 --target 11.5267,47.669
///
///   # Area of the polygons in a JSON file of GeoJSON polygon coordinates
///   mapsketch area drawn.json
#[derive(Parser, Debug)]
#[command(name = "mapsketch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches mapsketch.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a point, then rotate it about the origin
    Transform {
        #[arg(allow_hyphen_values = true)]
        point: Point2D,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        dy: f64,
        /// Rotation in degrees, counter-clockwise
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        angle: f64,
    },

    /// Outline of a drawn shape: star, box, square, circle or polygon:<sides>
    Shape {
        kind: ShapeKind,
        #[arg(long, allow_hyphen_values = true)]
        center: Point2D,
        #[arg(long, allow_hyphen_values = true)]
        cursor: Point2D,
        /// Star outline points (overrides config)
        #[arg(long)]
        star_points: Option<usize>,
        /// Star inner radius fraction (overrides config)
        #[arg(long)]
        inner_fraction: Option<f64>,
        /// Circle segments (overrides config)
        #[arg(long)]
        segments: Option<usize>,
        /// Minimum drag distance before a shape is produced (overrides config)
        #[arg(long)]
        min_drag: Option<f64>,
        /// Rotate the outline about the origin after translating by this offset
        #[arg(long, allow_hyphen_values = true)]
        translate: Option<Point2D>,
        /// Rotation in degrees used with --translate
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        rotate: f64,
    },

    /// Meters east/north of a target from a model origin, via normalized Mercator
    Offset {
        #[arg(long, allow_hyphen_values = true)]
        origin: Point2D,
        #[arg(long, allow_hyphen_values = true)]
        target: Point2D,
        /// Origin altitude in meters
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        altitude: f64,
    },

    /// Convert lon,lat to EPSG:3857 meters (or back with --inverse)
    Project {
        #[arg(allow_hyphen_values = true)]
        point: Point2D,
        #[arg(long)]
        inverse: bool,
    },

    /// Geodesic area of polygons read from a JSON file
    ///
    /// The file holds an array of polygons, each an array of rings of
    /// [lon, lat] pairs (GeoJSON Polygon coordinates).
    Area { file: PathBuf },

    /// Scale bar length and label for a ground resolution
    Scale {
        /// Ground meters per pixel
        #[arg(long)]
        resolution: Option<f64>,
        /// Derive the resolution from an EPSG:3857 view resolution at this latitude
        #[arg(long, allow_hyphen_values = true, requires = "view_resolution")]
        latitude: Option<f64>,
        /// EPSG:3857 units per pixel, used with --latitude
        #[arg(long)]
        view_resolution: Option<f64>,
        #[arg(long)]
        units: Option<ScaleUnits>,
        #[arg(long)]
        min_width: Option<f64>,
    },

    /// Format a coordinate readout
    Format {
        #[arg(allow_hyphen_values = true)]
        point: Point2D,
        #[arg(long)]
        precision: Option<usize>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        FileConfig::from_path(config_path)?
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    init_logging(verbose);

    let output = run(args.command, &file_config)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to serialize output")?
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, std::env::var("RUST_LOG").ok()))
        .with_writer(std::io::stderr)
        .init();
}

/// `-v` forces debug, otherwise `RUST_LOG` decides with info as the fallback
fn log_filter(verbose: bool, rust_log: Option<String>) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run(command: Command, config: &FileConfig) -> Result<Value> {
    match command {
        Command::Transform {
            point,
            dx,
            dy,
            angle,
        } => {
            let moved = translate_and_rotate(point, dx, dy, Degrees(angle));
            Ok(json!({ "x": moved.x, "y": moved.y }))
        }

        Command::Shape {
            kind,
            center,
            cursor,
            star_points,
            inner_fraction,
            segments,
            min_drag,
            translate,
            rotate,
        } => {
            let mut options = config.shape_options()?;
            if star_points.is_some() || inner_fraction.is_some() {
                options.star = StarShape::new(
                    star_points.unwrap_or(options.star.points()),
                    inner_fraction.unwrap_or(options.star.inner_fraction()),
                )?;
            }
            if let Some(segments) = segments {
                options.circle_segments = segments;
            }
            if let Some(min_drag) = min_drag {
                options.min_drag = min_drag;
            }

            let outline = draft_shape(kind, center, cursor, &options)?;
            let outline = match (outline, translate) {
                (Some(o), Some(t)) => Some(o.translate_and_rotate(t.x, t.y, Degrees(rotate))),
                (o, _) => o,
            };
            if outline.is_none() {
                tracing::info!("drag shorter than the minimum, no shape produced");
            }

            Ok(json!({
                "kind": kind.to_string(),
                "coordinates": outline.as_ref().map(|o| vec![o.to_coords()]),
            }))
        }

        Command::Offset {
            origin,
            target,
            altitude,
        } => {
            let model_origin = ModelOrigin::new(origin.x, origin.y, altitude);
            let offset = model_origin.offset_to(target.x, target.y);
            let mercator = model_origin.coordinate();
            tracing::debug!(
                x = mercator.x,
                y = mercator.y,
                z = mercator.z,
                "model origin in normalized Mercator"
            );
            Ok(json!({
                "east_m": offset.east_m,
                "north_m": offset.north_m,
                "meter_in_units": model_origin.scale().get(),
            }))
        }

        Command::Project { point, inverse } => {
            let projected = if inverse {
                web_mercator_to_lonlat(point)
            } else {
                lonlat_to_web_mercator(point)
            };
            Ok(json!({ "x": projected.x, "y": projected.y }))
        }

        Command::Area { file } => {
            let polygons = read_polygons(&file)?;
            match total_area(&polygons) {
                Some(area) => Ok(json!({
                    "polygons": polygons.len(),
                    "area_m2": area,
                    "rounded_m2": round_area(area),
                })),
                None => {
                    tracing::info!("no polygons to measure, draw a polygon first");
                    Ok(json!({ "polygons": 0, "area_m2": null, "rounded_m2": null }))
                }
            }
        }

        Command::Scale {
            resolution,
            latitude,
            view_resolution,
            units,
            min_width,
        } => {
            let resolution = match (resolution, latitude, view_resolution) {
                (Some(r), _, _) => r,
                (None, Some(lat), Some(view)) => view * point_resolution(lat),
                _ => bail!("Provide either --resolution or --latitude with --view-resolution"),
            };
            let units = units.unwrap_or(config.units);
            let min_width = min_width.unwrap_or(config.min_width_px);

            let bar = ScaleBar::compute(resolution, units, min_width)
                .context("Resolution and minimum width must be positive numbers")?;
            Ok(serde_json::to_value(bar)?)
        }

        Command::Format { point, precision } => {
            let precision = precision.unwrap_or(config.precision);
            Ok(json!(format_xy(point, precision)))
        }
    }
}

fn read_polygons(path: &Path) -> Result<Vec<geo::Polygon<f64>>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read polygon file: {}", path.display()))?;
    let raw: Vec<Vec<Vec<[f64; 2]>>> =
        serde_json::from_str(&contents).context("Failed to parse polygon coordinates")?;

    Ok(raw.into_iter().filter_map(polygon_from_rings).collect())
}

/// First ring is the exterior, the rest are holes; empty polygons are skipped
fn polygon_from_rings(rings: Vec<Vec<[f64; 2]>>) -> Option<geo::Polygon<f64>> {
    let mut rings = rings
        .into_iter()
        .map(|ring| Outline::from_points(ring.into_iter().map(Point2D::from)));
    let exterior = rings.next().filter(|o| o.vertex_count() >= 3)?;
    let holes = rings
        .filter(|o| o.vertex_count() >= 3)
        .map(|o| o.as_line_string().clone())
        .collect();
    Some(geo::Polygon::new(exterior.as_line_string().clone(), holes))
}
