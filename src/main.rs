use std::error::Error;
use std::{env, process};

use vector2d::{Vector2, ORIGIN};

fn parse_pair(
    x: Option<String>,
    y: Option<String>,
    default: (f64, f64),
) -> Result<Vector2, Box<dyn Error>> {
    match (x, y) {
        (Some(x), Some(y)) => Ok(Vector2::new(x.parse::<f64>()?, y.parse::<f64>()?)),
        (None, None) => Ok(Vector2::new(default.0, default.1)),
        _ => Err("coord needs both x and y value".into()),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args();
    args.next();
    let vector = parse_pair(args.next(), args.next(), (12.0, 13.0))?;
    let pivot = parse_pair(args.next(), args.next(), (20.0, 10.0))?;

    println!("vector create at timestamp {}", vector.w());
    println!("vector.x value is {}", vector.x());
    println!("vector value is {}", vector.value_of());

    println!("begin change vector.x value to 100");
    if let Err(err) = vector.assign("x", 100.0) {
        println!("{}", err.message());
        println!("vector.x value change deny");
    }

    println!(
        "vector {} normalized is {} and trend is {}",
        vector,
        vector.normalize(),
        Vector2::trend(&vector)
    );

    let vector2 = vector.forward(200);
    println!("a new vector2 on vector forward 200 unit at {}", vector2);
    println!("now distance is {}", Vector2::distance(&vector, &vector2));

    let vector3 = vector.forward(-100);
    println!(
        "a new vector3 on vector forward -100 (eq. backward 100) unit at {}",
        vector3
    );
    println!(
        "vector3 at ORIGIN angle is {}",
        Vector2::angle(&vector3, &ORIGIN)
    );

    let vector4 = vector.shift(&pivot);
    println!("a new vector4 on vector shift {} at pivot {} ", vector4, pivot);
    println!("now distance is {}", Vector2::distance(&vector, &vector4));
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("usage: vector2d [x y [pivot_x pivot_y]]");
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
