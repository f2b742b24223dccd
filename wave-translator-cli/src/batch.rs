//! Batch translation
//!
//! Translators are pure and the dispatcher is only read during translation,
//! so one dispatcher is shared across rayon workers.

use crate::config::SignalConfig;
use crate::report::ReportRow;
use rayon::prelude::*;
use wave_translator::Dispatcher;

/// Translate every value of every signal, keeping input order
pub fn translate_signals(dispatcher: &Dispatcher, signals: &[SignalConfig]) -> Vec<ReportRow> {
    signals
        .par_iter()
        .flat_map_iter(|signal| {
            let translator = dispatcher.translator_for_signal(&signal.name, signal.bits);
            log::debug!(
                "Translating {} values of {} with {}",
                signal.values.len(),
                signal.name,
                translator
            );

            signal.values.iter().map(move |value| {
                let result = dispatcher.translate(translator, signal.bits, value);
                ReportRow::new(Some(&signal.name), translator, signal.bits, value, result)
            })
        })
        .collect()
}

/// Translate loose values with one translator
pub fn translate_values(
    dispatcher: &Dispatcher,
    translator: &str,
    num_bits: u32,
    values: &[String],
) -> Vec<ReportRow> {
    values
        .par_iter()
        .map(|value| {
            let result = dispatcher.translate(translator, num_bits, value);
            ReportRow::new(None, translator, num_bits, value, result)
        })
        .collect()
}
