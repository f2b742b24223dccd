// End-to-end checks of the public API: registry, value tables, dispatcher
use std::fs;
use wave_translator::{
    DispatchConfig, Dispatcher, TranslationResult, TranslatorRegistry, ValueKind,
};

fn write_table(dir: &std::path::Path, file: &str, content: &str) {
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn hex_translator_examples() {
    let dispatcher = Dispatcher::default();

    assert_eq!(
        dispatcher.translate("Hexadecimal", 16, "255"),
        TranslationResult::new("0x00ff", ValueKind::Normal)
    );
    assert_eq!(
        dispatcher.translate("Hexadecimal", 8, "abc"),
        TranslationResult::new("abc", ValueKind::Warn)
    );
    assert_eq!(
        dispatcher.translate("Hexadecimal", 4, "15"),
        TranslationResult::new("0xf", ValueKind::Normal)
    );
}

#[test]
fn hex_translator_beyond_128_bits() {
    let dispatcher = Dispatcher::default();

    // 2^128
    let result = dispatcher.translate("Hexadecimal", 256, "340282366920938463463374607431768211456");
    assert_eq!(result.display, format!("0x{}1{}", "0".repeat(31), "0".repeat(32)));
    assert_eq!(result.kind, ValueKind::Normal);

    let result = dispatcher.translate("Hexadecimal", 256, "-1");
    assert_eq!(result.display, format!("0x{}", "f".repeat(64)));
    assert_eq!(result.kind, ValueKind::Normal);
}

#[test]
fn hex_matches_reference_for_wide_integers() {
    let dispatcher = Dispatcher::default();
    // 3^k grows past every machine word
    let mut value = num::BigUint::from(1u32);
    for _ in 0..200 {
        value *= 3u32;
        for num_bits in [8u32, 160, 320] {
            let expected = format!("0x{:0width$x}", value, width = (num_bits / 4) as usize);
            let result = dispatcher.translate("Hexadecimal", num_bits, &value.to_string());
            assert_eq!(result, TranslationResult::normal(expected));
        }
    }
}

#[test]
fn value_tables_from_config_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_table(
        dir.path(),
        "fsm.toml",
        "name = \"FSM state\"\nwidth = 2\n[values]\n0 = \"IDLE\"\n1 = \"RUN\"\n",
    );
    write_table(dir.path(), "broken.toml", "this is not toml = = =");
    write_table(dir.path(), "notes.txt", "ignored");

    let config = DispatchConfig::new()
        .add_value_table_dir(dir.path())
        .with_signal_translator("top.other", "FSM state");
    let dispatcher = Dispatcher::new(TranslatorRegistry::with_builtins(), &config).unwrap();

    let stats = dispatcher.registry().stats();
    assert_eq!(stats.num_user, 1);

    // Preferred by width, no explicit selection needed
    let idle = dispatcher.translate_signal("top.state", 2, "0");
    assert_eq!(idle, TranslationResult::normal("IDLE"));

    let unknown = dispatcher.translate_signal("top.state", 2, "3");
    assert_eq!(unknown.display, "ERROR (3)");
    assert_eq!(unknown.kind, ValueKind::Warn);

    // Wider signals fall back to the default translator
    assert_eq!(
        dispatcher.translate_signal("top.bus", 8, "1").display,
        "0x01"
    );
}

#[test]
fn dispatcher_shared_across_threads() {
    let dispatcher = Dispatcher::default();
    let values: Vec<String> = (0..256u32).map(|v| v.to_string()).collect();

    std::thread::scope(|scope| {
        for chunk in values.chunks(64) {
            let dispatcher = &dispatcher;
            scope.spawn(move || {
                for value in chunk {
                    let n: u32 = value.parse().unwrap();
                    let result = dispatcher.translate("Hexadecimal", 8, value);
                    assert_eq!(result.display, format!("0x{n:02x}"));
                    assert_eq!(result.kind, ValueKind::Normal);
                }
            });
        }
    });
}

#[test]
fn every_builtin_survives_odd_input() {
    let dispatcher = Dispatcher::default();
    let odd_inputs = [
        "",
        " ",
        "-",
        "x",
        "Z",
        "1_000",
        "-340282366920938463463374607431768211455",
        "1340282366920938463463374607431768211455",
        "\u{0663}",
        "🦀",
    ];

    for name in dispatcher.registry().names() {
        for num_bits in [1u32, 7, 8, 64, 128, 300] {
            for value in odd_inputs {
                let result = dispatcher.translate(name, num_bits, value);
                assert_ne!(
                    result.kind,
                    ValueKind::Error,
                    "{name} failed on {value:?} at {num_bits} bits"
                );
            }
        }
    }
}
