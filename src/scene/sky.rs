//! Time-of-day background: the sun's height picks the sky palette.

use super::rgb8;
use glam::Vec4;

/// Sun height as a fraction of the canvas, 0 at the top.
pub fn time_of_day(sun_y: f32, canvas_height: f32) -> f32 {
    if canvas_height <= 0.0 {
        return 0.0;
    }
    sun_y / canvas_height
}

struct Palette {
    top: Vec4,
    bottom: Vec4,
}

fn morning() -> Palette {
    Palette {
        top: rgb8(255, 223, 186),
        bottom: rgb8(255, 255, 255),
    }
}

fn afternoon() -> Palette {
    Palette {
        top: rgb8(135, 206, 250),
        bottom: rgb8(255, 255, 255),
    }
}

fn evening() -> Palette {
    Palette {
        top: rgb8(255, 165, 0),
        bottom: rgb8(75, 0, 130),
    }
}

fn night() -> Palette {
    Palette {
        top: rgb8(0, 0, 100),
        bottom: rgb8(0, 0, 25),
    }
}

/// Top and bottom sky colours for a time of day.
///
/// Quarter bands blend morning, afternoon, evening and night; the last
/// quarter is plain night.
pub fn gradient(time_of_day: f32) -> (Vec4, Vec4) {
    let (from, to, start) = if time_of_day < 0.25 {
        (morning(), afternoon(), 0.0)
    } else if time_of_day < 0.5 {
        (afternoon(), evening(), 0.25)
    } else if time_of_day < 0.75 {
        (evening(), night(), 0.5)
    } else {
        let night = night();
        return (night.top, night.bottom);
    };

    let k = ((time_of_day - start) * 4.0).clamp(0.0, 1.0);
    (from.top.lerp(to.top, k), from.bottom.lerp(to.bottom, k))
}
