pub mod animation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod geometry;
pub mod plot;
pub mod rng;
pub mod sampler;
pub mod session;
pub mod weights;

pub use animation::{Animator, Phase, Scheduler, TaskId};
pub use config::{RegenPolicy, VizConfig};
pub use dataset::{ClusterLayout, Dataset, DatasetSize, Point};
pub use error::VizErr;
pub use export::TextSink;
pub use geometry::{Bounds, Segment};
pub use plot::{Axis, PlotAdapter, SeriesId};
pub use rng::Mulberry32;
pub use session::{Command, Session, Status};
pub use weights::WeightTriple;
