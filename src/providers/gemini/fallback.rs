//! Canned coaching copy used when the generative upstream fails

/// Fallback coaching tip by language and score bucket.
pub fn fallback_tip(language: &str, score: f64) -> &'static str {
    let (low, mid, high) = match language {
        "es" => (
            "¡Mantén los brazos más arriba!",
            "¡Gran energía! Cuida el ritmo.",
            "¡Perfecto! ¡Estás en llamas!",
        ),
        "de" => (
            "Halte die Arme höher!",
            "Tolle Energie! Achte auf das Timing.",
            "Perfekt! Du bist on fire!",
        ),
        "ru" => (
            "Держи руки выше!",
            "Отличная энергия! Следи за ритмом.",
            "Идеально! Ты в ударе!",
        ),
        _ => (
            "Keep those arms up higher!",
            "Great energy! Watch your timing.",
            "Perfect! You're on fire!",
        ),
    };

    if score < 70.0 {
        low
    } else if score > 90.0 {
        high
    } else {
        mid
    }
}

/// Fallback performance review by language.
pub fn fallback_review(language: &str, score: f64, song_title: &str) -> String {
    match language {
        "es" => format!(
            "¡Buen trabajo en {}! Obtuviste {:.0}%. Sigue practicando y seguirás mejorando. ¿Listo para otra ronda?",
            song_title, score
        ),
        "de" => format!(
            "Gut gemacht bei {}! Du hast {:.0}% erreicht. Übe weiter und du wirst dich verbessern. Bereit für eine weitere Runde?",
            song_title, score
        ),
        "ru" => format!(
            "Отличная работа над {}! Ты набрал {:.0}%. Продолжай практиковаться. Готов к ещё одному раунду?",
            song_title, score
        ),
        _ => format!(
            "Great job on {}! You scored {:.0}%. Keep practicing and you'll keep improving. Ready for another round?",
            song_title, score
        ),
    }
}
