//! Host events.
//!
//! The frame loop never talks to a windowing system directly; the host
//! (or the headless console driver) delivers these over a channel and the
//! scheduler drains them at tick boundaries.

/// An event delivered by the hosting window or the console driver.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Named key pressed, e.g. `ArrowUp`.
    KeyDown(String),
    /// Named key released.
    KeyUp(String),
    /// Window resized.
    Resized {
        width: u32,
        height: u32,
        device_pixel_ratio: f32,
    },
    /// Double-click on the canvas toggles fullscreen.
    DoubleClick,
}

fn arrow_key(word: &str) -> Option<&'static str> {
    match word {
        "up" => Some("ArrowUp"),
        "down" => Some("ArrowDown"),
        "left" => Some("ArrowLeft"),
        "right" => Some("ArrowRight"),
        _ => None,
    }
}

impl HostEvent {
    /// Parses a console-driver line into an event.
    ///
    /// Supported forms:
    ///   hold <up|down|left|right>
    ///   release <up|down|left|right>
    ///   resize <width> <height>
    ///   fullscreen
    pub fn parse_line(line: &str) -> Option<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["hold", word] => arrow_key(word).map(|k| HostEvent::KeyDown(k.to_string())),
            ["release", word] => arrow_key(word).map(|k| HostEvent::KeyUp(k.to_string())),
            ["resize", w, h] => {
                let width = w.parse().ok()?;
                let height = h.parse().ok()?;
                Some(HostEvent::Resized {
                    width,
                    height,
                    device_pixel_ratio: 1.0,
                })
            }
            ["fullscreen"] => Some(HostEvent::DoubleClick),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hold_and_release() {
        assert_eq!(
            HostEvent::parse_line("hold up"),
            Some(HostEvent::KeyDown("ArrowUp".to_string()))
        );
        assert_eq!(
            HostEvent::parse_line("release right"),
            Some(HostEvent::KeyUp("ArrowRight".to_string()))
        );
    }

    #[test]
    fn parses_resize_and_fullscreen() {
        assert_eq!(
            HostEvent::parse_line("resize 800 600"),
            Some(HostEvent::Resized {
                width: 800,
                height: 600,
                device_pixel_ratio: 1.0,
            })
        );
        assert_eq!(HostEvent::parse_line("fullscreen"), Some(HostEvent::DoubleClick));
    }

    #[test]
    fn rejects_unknown_lines() {
        assert_eq!(HostEvent::parse_line("hold w"), None);
        assert_eq!(HostEvent::parse_line("resize 800"), None);
        assert_eq!(HostEvent::parse_line(""), None);
    }
}
