use std::error::Error;
use std::thread;
use std::time::Duration;

use vector2d::*;

fn main() -> Result<(), Box<dyn Error>> {
    // polyline points no need to be close
    let mut points = Vec::<Vector2>::new();
    for (x, y) in [(0.0, 0.0), (200.0, 0.0), (200.0, 100.0), (100.0, 100.0), (100.0, 200.0)] {
        points.push(Vector2::new(x, y));
        thread::sleep(Duration::from_millis(5));
    }

    let bound_min = Vector2::new(0.0, 0.0);
    let bound_max = Vector2::new(150.0, 150.0);

    for seg in points.windows(2) {
        let (start, end) = (&seg[0], &seg[1]);
        println!("segment {} -> {}", start, end);
        println!("  mid {}", Vector2::mid(start, end));
        println!("  angle {}", Vector2::angle(start, end));
        println!("  dot {}", Vector2::dot(start, end));
        if let Some(ms) = end.elapse(start) {
            println!("  elapse {} ms", ms);
        }
        for step in 0..=4 {
            let amount = step as f64 / 4.0;
            let p = Vector2::lerp(start, end, amount);
            let clamped = Vector2::clamp(&p, &bound_min, &bound_max);
            if clamped.equals(&p) {
                println!("  {:.2} at {}", amount, p);
            } else {
                println!("  {:.2} at {} clamped to {}", amount, p, clamped);
            }
        }
    }

    if let Err(err) = points[0].assign("y", 1.0) {
        eprintln!("{}", err);
    }
    Ok(())
}
