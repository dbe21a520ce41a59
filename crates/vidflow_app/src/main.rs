//! VidFlow desktop: native client for the VidFlow conversion service.
mod platform;

fn main() -> anyhow::Result<()> {
    platform::run_app()
}
