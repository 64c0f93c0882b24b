//! `sitepath segments <url>` – list path segments.

use anyhow::Result;
use sitepath_core::url_model::path_segments;

pub fn run_segments(url: &str, json: bool) -> Result<()> {
    let segments = path_segments(url);
    if json {
        println!("{}", serde_json::to_string(&segments)?);
    } else {
        for segment in segments {
            println!("{segment}");
        }
    }
    Ok(())
}
