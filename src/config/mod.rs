//! Configuration: fixed constants, environment settings, default paths.

mod settings;

pub use settings::{
    Config,
    default_db_path,
    CLEAN_AQI_THRESHOLD,
    GOAL_CLEAN_DAYS,
    DELHI_LAT,
    DELHI_LON,
    LOCATION_NAME,
};
