use colored::control::set_override;
use env_logger::Builder;
use log::LevelFilter;

pub fn init_logging(verbose: bool, no_color: bool) {
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_for(verbose))
        .format_timestamp(None)
        .init();
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
