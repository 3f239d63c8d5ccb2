use crate::Prediction;

/// Sentence read aloud after a successful prediction, one clause per result in
/// received order. `None` when there is nothing to say.
pub fn announcement(predictions: &[Prediction]) -> Option<String> {
    if predictions.is_empty() {
        return None;
    }

    let sentence = predictions
        .iter()
        .map(|p| format!("{} con {}% de probabilidad", p.class_name, p.percentage()))
        .collect::<Vec<_>>()
        .join(". ");

    Some(sentence)
}
