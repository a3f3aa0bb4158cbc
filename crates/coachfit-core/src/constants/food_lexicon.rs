// ABOUTME: Meal-name keywords, food-name lexicons, and reference foods for coverage injection
// ABOUTME: Used once at normalization time to tag meals and foods, never by the transform stages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Coachfit

//! Keyword lexicons for meal and food classification.
//!
//! Generated plans arrive in English or Portuguese, so every list carries both.
//! Matching is a case-insensitive substring test against the lowercased name.
//! Keywords that are substrings of common unrelated food names are left out
//! (`maca` would match `macarrão`, `pera` would match `temperado`).

/// Keywords marking a lunch meal
pub const LUNCH_KEYWORDS: &[&str] = &["lunch", "almoço", "almoco"];

/// Keywords marking a dinner meal
pub const DINNER_KEYWORDS: &[&str] = &["dinner", "supper", "jantar"];

/// Keywords marking a breakfast meal
pub const BREAKFAST_KEYWORDS: &[&str] = &[
    "breakfast",
    "café da manhã",
    "cafe da manha",
    "desjejum",
];

/// Keywords marking a snack meal
pub const SNACK_KEYWORDS: &[&str] = &[
    "snack",
    "lanche",
    "ceia",
    "colação",
    "colacao",
    "pre-workout",
    "post-workout",
    "pré-treino",
    "pós-treino",
];

/// Food names classified as fruit (checked before vegetables)
pub const FRUIT_KEYWORDS: &[&str] = &[
    "fruit",
    "fruta",
    "banana",
    "apple",
    "maçã",
    "orange",
    "laranja",
    "tangerine",
    "tangerina",
    "mexerica",
    "strawberr",
    "morango",
    "blueberr",
    "mirtilo",
    "berry",
    "berries",
    "grape",
    "uva",
    "pear",
    "pêra",
    "mango",
    "manga",
    "papaya",
    "mamão",
    "mamao",
    "pineapple",
    "abacaxi",
    "melon",
    "melão",
    "melancia",
    "kiwi",
    "peach",
    "pêssego",
    "guava",
    "goiaba",
    "plum",
    "ameixa",
    "cherr",
    "cereja",
    "açaí",
    "acai",
];

/// Food names classified as vegetable or salad
pub const VEGETABLE_KEYWORDS: &[&str] = &[
    "vegetable",
    "veggie",
    "vegetais",
    "legumes",
    "verdura",
    "salad",
    "salada",
    "lettuce",
    "alface",
    "arugula",
    "rúcula",
    "rucula",
    "spinach",
    "espinafre",
    "kale",
    "couve",
    "cabbage",
    "repolho",
    "broccoli",
    "brócolis",
    "brocolis",
    "cauliflower",
    "carrot",
    "cenoura",
    "tomato",
    "tomate",
    "cucumber",
    "pepino",
    "zucchini",
    "abobrinha",
    "eggplant",
    "berinjela",
    "green bean",
    "vagem",
    "asparagus",
    "aspargo",
    "beet",
    "beterraba",
    "chuchu",
    "bell pepper",
    "pimentão",
];

/// Fixed nutrition values of a reference food used when injecting coverage items
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFood {
    /// Display name
    pub name: &'static str,
    /// Portion description
    pub portion: &'static str,
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrate (g)
    pub carb_g: f64,
    /// Fat (g)
    pub fat_g: f64,
}

/// Reference food plus its two substitution alternatives
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceItem {
    /// The food that is injected
    pub food: ReferenceFood,
    /// Alternatives carried as substitutions
    pub substitutions: [ReferenceFood; 2],
}

/// Fruit injected when the day has too few fruit items
pub const REFERENCE_FRUIT: ReferenceItem = ReferenceItem {
    food: ReferenceFood {
        name: "Banana",
        portion: "1 medium unit (120 g)",
        calories: 105.0,
        protein_g: 1.3,
        carb_g: 27.0,
        fat_g: 0.4,
    },
    substitutions: [
        ReferenceFood {
            name: "Apple",
            portion: "1 medium unit (150 g)",
            calories: 78.0,
            protein_g: 0.4,
            carb_g: 20.7,
            fat_g: 0.3,
        },
        ReferenceFood {
            name: "Orange",
            portion: "1 medium unit (180 g)",
            calories: 85.0,
            protein_g: 1.7,
            carb_g: 21.2,
            fat_g: 0.2,
        },
    ],
};

/// Vegetable injected into principal meals that lack one
pub const REFERENCE_VEGETABLE: ReferenceItem = ReferenceItem {
    food: ReferenceFood {
        name: "Mixed green salad",
        portion: "2 cups (100 g) with lemon",
        calories: 25.0,
        protein_g: 1.5,
        carb_g: 4.5,
        fat_g: 0.3,
    },
    substitutions: [
        ReferenceFood {
            name: "Steamed broccoli",
            portion: "1 cup (90 g)",
            calories: 31.0,
            protein_g: 2.5,
            carb_g: 6.0,
            fat_g: 0.3,
        },
        ReferenceFood {
            name: "Sauteed spinach",
            portion: "1 cup (180 g)",
            calories: 41.0,
            protein_g: 5.3,
            carb_g: 6.8,
            fat_g: 0.5,
        },
    ],
};

/// Returns true if the lowercased `name` contains any keyword of `lexicon`
#[must_use]
pub fn matches_any(name: &str, lexicon: &[&str]) -> bool {
    let lowered = name.to_lowercase();
    lexicon.iter().any(|keyword| lowered.contains(keyword))
}
