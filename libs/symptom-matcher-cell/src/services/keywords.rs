use shared_models::Specialty;

use crate::models::KeywordGroup;

/// Trigger phrases per specialty. Specialties appear in `Specialty` declaration
/// order; within a specialty, keyword order decides the order of matched
/// keywords in a result. Matching lowercases the input only, so an entry with
/// uppercase letters ("BP") never matches.
pub static SPECIALTY_KEYWORDS: [(Specialty, &[&str]); 6] = [
    (
        Specialty::Dermatologist,
        &[
            "skin", "rash", "acne", "eczema", "pigmentation", "hair fall", "allergy",
            "dermatitis", "psoriasis", "infection", "fungal", "itchy", "redness",
            "blister", "wart", "mole", "hair loss", "baldness", "scalp",
        ],
    ),
    (
        Specialty::Neurologist,
        &[
            "headache", "migraine", "seizure", "sleep disorder", "stroke", "dizziness",
            "vertigo", "epilepsy", "tremor", "numbness", "tingling", "memory loss",
            "confusion", "neurological", "brain", "nerve", "paralysis", "convulsion",
        ],
    ),
    (
        Specialty::Psychiatrist,
        &[
            "anxiety", "depression", "stress", "panic", "mood", "trauma", "mental health",
            "bipolar", "schizophrenia", "obsessive", "compulsive", "phobia", "eating disorder",
            "addiction", "suicidal", "emotional", "behavioral", "therapy", "counseling",
        ],
    ),
    (
        Specialty::GeneralPhysician,
        &[
            "fever", "cough", "cold", "sore throat", "infection", "flu", "diabetes", "BP",
            "blood pressure", "viral", "bacterial", "nausea", "vomiting", "diarrhea",
            "fatigue", "weakness", "general", "routine", "checkup", "health",
        ],
    ),
    (
        Specialty::Cardiologist,
        &[
            "chest pain", "heart", "palpitation", "BP", "arrhythmia", "cardiac",
            "cardiovascular", "hypertension", "heart attack", "angina", "breathlessness",
            "shortness of breath", "heart rate", "irregular", "cardiac arrest",
        ],
    ),
    (
        Specialty::Pediatrician,
        &[
            "child", "children", "baby", "infant", "growth", "pediatric", "kid",
            "toddler", "newborn", "adolescent", "teen", "development", "vaccination",
            "immunization", "feeding", "nutrition", "milestone",
        ],
    ),
];

pub fn keywords_for(specialty: Specialty) -> &'static [&'static str] {
    SPECIALTY_KEYWORDS
        .iter()
        .find(|(s, _)| *s == specialty)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

pub fn keyword_groups() -> Vec<KeywordGroup> {
    Specialty::ALL
        .iter()
        .map(|specialty| KeywordGroup {
            specialty: *specialty,
            keywords: keywords_for(*specialty),
        })
        .collect()
}
