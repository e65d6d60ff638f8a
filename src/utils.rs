use js_sys::Date;
use std::time::Duration;

type UnixTime = Duration;

pub fn current_time() -> UnixTime {
    let date = Date::new_0();
    let milliseconds_since_epoch = date.get_time() as u64;
    let seconds_since_epoch = milliseconds_since_epoch / 1000;
    UnixTime::from_secs(seconds_since_epoch)
}

/// Joins the class names whose flag is set.
pub fn class_names(classes: &[(&str, bool)]) -> String {
    classes
        .iter()
        .filter(|(_, on)| *on)
        .map(|(class, _)| *class)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn px(value: f32) -> String {
    format!("{:.1}px", value)
}
