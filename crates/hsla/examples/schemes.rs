// SPDX-License-Identifier: MIT
//
// hsla demo — print every harmony scheme for a base color.
//
// The base color is read in canonical form from the first argument, so
// anything `Display` prints can be fed straight back in.
//
// Usage:
//   cargo run -p hsla --example schemes
//   cargo run -p hsla --example schemes -- "hsla(200, 70%, 45%, 1)"

use std::env;
use std::process;

use hsla::{Harmony, Hsla};

fn main() {
    let base = match env::args().nth(1) {
        Some(arg) => match arg.parse::<Hsla>() {
            Ok(color) => color,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(2);
            }
        },
        None => Hsla::new(60.0, 80.0, 50.0, 1.0),
    };

    println!("base         {base}");
    println!("lighter      {}", base.lighten(20.0));
    println!("darker       {}", base.darken(20.0));
    println!("muted        {}", base.desaturate(40.0));
    println!("translucent  {}", base.with_alpha(0.5));
    println!();

    for &harmony in Harmony::all() {
        let colors: Vec<String> = harmony.apply(base).iter().map(ToString::to_string).collect();
        println!("{:<13}{}", harmony.name(), colors.join("  "));
    }
}
