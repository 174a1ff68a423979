//! Wiederverwendbare Eingabe-Widgets.

use std::ops::RangeInclusive;

use crate::app::NumericFieldState;

/// Validiertes Zahlenfeld über einem Text-Puffer.
///
/// Zwischenzustände wie `""`, `"-"` oder `"1."` bleiben beim Tippen
/// stehen; andere ungültige Eingaben werden sofort zurückgesetzt.
/// Commit erfolgt bei Enter bzw. Fokusverlust (mit Clamping auf
/// `range`), die Pfeiltasten ändern den Wert schrittweise und
/// committen sofort. Gibt bei einem Commit den neuen Wert zurück.
pub fn validated_numeric_field(
    ui: &mut egui::Ui,
    field: &mut NumericFieldState,
    model: f32,
    range: RangeInclusive<f32>,
    step: f32,
) -> Option<f32> {
    // Den Puffer nur abgleichen, solange das Feld nicht bearbeitet wird
    // (Modellwert kann sich z.B. durch Undo geändert haben)
    if !field.had_focus && field.synced_to != Some(model) {
        field.buffer = format_value(model);
        field.last_good = field.buffer.clone();
        field.synced_to = Some(model);
    }

    let response = ui.add(egui::TextEdit::singleline(&mut field.buffer).desired_width(64.0));
    let mut committed = None;

    if response.changed() {
        if is_acceptable_input(&field.buffer) {
            field.last_good = field.buffer.clone();
        } else {
            field.buffer = field.last_good.clone();
        }
    }

    // Pfeiltasten: schrittweise Änderung mit sofortigem Commit
    if response.has_focus() {
        let (up, down) = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowUp),
                i.key_pressed(egui::Key::ArrowDown),
            )
        });
        if up || down {
            let direction = if up { step } else { -step };
            let base = field.buffer.trim().parse::<f32>().unwrap_or(model);
            let next = (base + direction).clamp(*range.start(), *range.end());
            field.buffer = format_value(next);
            field.last_good = field.buffer.clone();
            field.synced_to = Some(next);
            if next != model {
                committed = Some(next);
            }
        }
    }

    // Enter gibt in egui den Fokus ab, lost_focus deckt beide Fälle ab
    if response.lost_focus() {
        let value = match field.buffer.trim().parse::<f32>() {
            Ok(v) => v.clamp(*range.start(), *range.end()),
            Err(_) => model,
        };
        field.buffer = format_value(value);
        field.last_good = field.buffer.clone();
        field.synced_to = Some(value);
        if value != model {
            committed = Some(value);
        }
    }

    field.had_focus = response.has_focus();
    committed
}

/// Akzeptiert vollständige Zahlen sowie tippbare Zwischenzustände.
fn is_acceptable_input(input: &str) -> bool {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "+" {
        return true;
    }
    if trimmed.parse::<f32>().is_ok() {
        return true;
    }
    // "1." bzw. "-." während des Tippens zulassen
    if let Some(head) = trimmed.strip_suffix('.') {
        return head.is_empty() || head == "-" || head == "+" || head.parse::<i64>().is_ok();
    }
    false
}

fn format_value(value: f32) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::is_acceptable_input;

    #[test]
    fn complete_numbers_are_acceptable() {
        assert!(is_acceptable_input("5"));
        assert!(is_acceptable_input("-3.25"));
        assert!(is_acceptable_input(" 40 "));
    }

    #[test]
    fn typing_intermediates_are_acceptable() {
        assert!(is_acceptable_input(""));
        assert!(is_acceptable_input("-"));
        assert!(is_acceptable_input("1."));
        assert!(is_acceptable_input("-."));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(!is_acceptable_input("abc"));
        assert!(!is_acceptable_input("1.2.3"));
        assert!(!is_acceptable_input("1,5"));
    }
}
