//! Site delivery: route mapping, static generation and the preview server.

mod builder;
mod router;
mod server;

pub use builder::{BuildSummary, build_site, site_routes};
pub use router::{RenderedPage, Route, is_path_segment, render_route};
pub use server::{PreviewServer, ServedResponse, etag_for, respond_to};
