#![expect(missing_docs, reason = "example")]

use taglog::{LevelFilter, StderrSink};

fn main() {
    taglog::set_sink(&StderrSink::DEFAULT);
    taglog::set_output_level(LevelFilter::Debug);
    taglog::set_tag_prefix("DEMO");

    taglog::info!(tag: "BOOT", "starting up");
    listen();

    taglog::set_output_level(LevelFilter::None);
    taglog::error!("silenced without recompiling");
}

fn listen() {
    let port = 8080;
    taglog::debug!(tag: "NET", "binding port {port}");
    taglog::warn!("no peers yet");
}
