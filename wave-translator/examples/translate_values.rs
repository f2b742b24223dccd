//! Translate a handful of samples with every built-in translator
//!
//! This example shows:
//! 1. Building a registry from the built-in registration table
//! 2. Registering a value table next to the built-ins
//! 3. Dispatching the same samples to each translator

use wave_translator::{Dispatcher, Translator, ValueTableTranslator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Translating samples ===\n");

    let mut dispatcher = Dispatcher::default();
    dispatcher.registry_mut().register(Box::new(ValueTableTranslator::new(
        "Traffic light",
        8,
        [
            (0, "RED".to_string()),
            (1, "YELLOW".to_string()),
            (2, "GREEN".to_string()),
        ],
    )));

    let stats = dispatcher.registry().stats();
    println!("Registry loaded:");
    println!("  Translators: {}", stats.num_translators);
    println!("  Built-in:    {}", stats.num_builtin);
    println!("  User:        {}", stats.num_user);

    let samples = ["0", "2", "255", "-1", "x", "abc"];

    for name in dispatcher.registry().candidates(8) {
        println!("\n{name}:");
        for sample in samples {
            let result = dispatcher.translate(name, 8, sample);
            println!("  {sample:>5} -> {:<12} [{}]", result.display, result.kind);
        }
    }

    // Translators are plain trait objects; hosts may call them directly
    let hex = wave_translator::translators::HexTranslator;
    println!("\n{} of 255 at 16 bits: {}", hex.name(), hex.translate(16, "255"));

    Ok(())
}
