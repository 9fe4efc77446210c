// Drive the engine through a scripted key sequence, printing the display
// after every key: the same call-then-read pattern a GUI frontend uses.
//
// Run with: cargo run -p deskcalc --example replay

use libcalc_core::{CalculatorEngine, Key, KeyResult};

fn main() {
    let script = "2+3*4=";

    let mut engine = CalculatorEngine::new();
    println!("replaying '{script}'");
    for ch in script.chars() {
        let result = engine.process_key(Key::Char(ch));
        let frame = engine.display();
        println!(
            "key '{}' ({:?}): pending=[{}] current=[{}]",
            ch, result, frame.pending, frame.current
        );
        debug_assert_eq!(result, KeyResult::Handled);
    }

    let frame = engine.display();
    println!("final display: {}", frame.current);
}
