extern crate latlon;

use std::env;

use latlon::{Format, LatLon};

#[allow(dead_code)]
fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 5 {
        return help();
    }

    let numbers: Result<Vec<f64>, _> = args[1..5].iter().map(|arg| arg.parse::<f64>()).collect();
    let numbers = match numbers {
        Ok(numbers) => numbers,
        Err(err) => {
            eprintln!("invalid number: {}", err);
            return help();
        }
    };

    let format = match args.get(5).map(|arg| arg.parse::<Format>()) {
        Some(Ok(format)) => format,
        Some(Err(err)) => {
            eprintln!("{}", err);
            return help();
        }
        None => Format::default(),
    };

    match (LatLon::new(numbers[0], numbers[1]), LatLon::new(numbers[2], numbers[3])) {
        (Ok(from), Ok(to)) => analyze(&from, &to, format),
        (Err(err), _) | (_, Err(err)) => eprintln!("{}", err),
    }
}

fn analyze(from: &LatLon, to: &LatLon, format: Format) {
    println!("from: {}", from.to_string_formatted(format, None));
    println!("to:   {}", to.to_string_formatted(format, None));
    println!();
    println!("great circle");
    println!("  distance:      {} km", from.distance_to(to));
    println!("  bearing:       {:.1}°", from.bearing_to(to));
    println!("  final bearing: {:.1}°", from.final_bearing_to(to));
    println!("  midpoint:      {}", from.midpoint_to(to).to_string_formatted(format, None));
    println!();
    println!("rhumb line");
    println!("  distance:      {:.3} km", from.rhumb_distance_to(to));
    println!("  bearing:       {:.1}°", from.rhumb_bearing_to(to));
    println!("  midpoint:      {}", from.rhumb_midpoint_to(to).to_string_formatted(format, None));
}

fn help() {
    println!("usage: latlon <lat1> <lon1> <lat2> <lon2> [d|dm|dms]");
}
