// Small shared helpers.

use wasm_bindgen::JsValue;

pub fn format_time(secs: u64) -> String {
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    let s = secs % 60;
    if h > 0 {
        format!("{:01}:{:02}:{:02}", h, m, s)
    } else if m > 0 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{}s", s)
    }
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn format_time_picks_shortest_form() {
        assert_eq!(format_time(42), "42s");
        assert_eq!(format_time(62), "01:02");
        assert_eq!(format_time(3723), "1:02:03");
    }
}
