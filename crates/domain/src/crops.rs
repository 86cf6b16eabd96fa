// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static crop knowledge base.
//!
//! Maps every crop the classifier can produce to a short growing-conditions
//! description. The table is fixed at compile time and never mutated.

/// Description returned for crops that are not in the table.
pub const FALLBACK_DESCRIPTION: &str = "No additional information available for this crop.";

/// A single knowledge base entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropInfo {
    /// Lowercase crop name, as spelled in the training data.
    pub name: &'static str,
    /// Human-readable growing conditions.
    pub description: &'static str,
}

const CROP_INFO: [CropInfo; 22] = [
    CropInfo {
        name: "rice",
        description: "Rice thrives in hot and humid climates. It requires plenty of water and clayey or loamy soil. Ideal temperature: 20°C–37°C.",
    },
    CropInfo {
        name: "maize",
        description: "Maize prefers warm climates and well-drained fertile soil with moderate rainfall. Ideal temperature: 18°C–27°C.",
    },
    CropInfo {
        name: "chickpea",
        description: "Chickpeas grow best in cool, dry climates and well-drained loamy soil. Ideal for rabi (winter) season.",
    },
    CropInfo {
        name: "kidneybeans",
        description: "Kidney beans prefer warm, frost-free climates. They grow best in well-drained loamy soil with moderate rainfall.",
    },
    CropInfo {
        name: "pigeonpeas",
        description: "Pigeon peas are drought-resistant and grow well in tropical climates with moderate rainfall. Ideal temperature: 18°C–35°C.",
    },
    CropInfo {
        name: "mothbeans",
        description: "Moth beans thrive in arid and semi-arid regions. They tolerate drought well and grow best in sandy or loamy soil.",
    },
    CropInfo {
        name: "blackgram",
        description: "Black gram (urad dal) grows well in warm, humid climates with well-drained loamy soil. It's often grown in the monsoon season.",
    },
    CropInfo {
        name: "lentil",
        description: "Lentils prefer cool, dry climates and fertile, well-drained loamy soil. Ideal temperature: 10°C–25°C.",
    },
    CropInfo {
        name: "pomegranate",
        description: "Pomegranates grow best in dry climates with moderate temperatures. They require well-drained sandy or loamy soil.",
    },
    CropInfo {
        name: "grapes",
        description: "Grapes thrive in warm, dry climates with plenty of sunlight. They prefer well-drained, fertile soil. Ideal temperature: 15°C–35°C.",
    },
    CropInfo {
        name: "watermelon",
        description: "Watermelons prefer hot, dry climates and sandy loam soil rich in organic matter. They need abundant sunlight.",
    },
    CropInfo {
        name: "muskmelon",
        description: "Muskmelons grow well in warm climates with well-drained sandy soil. They need low humidity during fruit development.",
    },
    CropInfo {
        name: "papaya",
        description: "Papayas grow well in tropical and subtropical climates with moderate rainfall. Ideal temperature: 25°C–35°C.",
    },
    CropInfo {
        name: "coconut",
        description: "Coconuts thrive in coastal tropical regions with high humidity, abundant sunlight, and sandy, well-drained soil.",
    },
    CropInfo {
        name: "jute",
        description: "Jute grows best in warm, humid climates with heavy rainfall and fertile alluvial soil. Ideal temperature: 24°C–35°C.",
    },
    CropInfo {
        name: "orange",
        description: "Oranges grow in tropical and subtropical climates with moderate rainfall and plenty of sunlight. Ideal temperature: 15°C–30°C.",
    },
    CropInfo {
        name: "cotton",
        description: "Cotton grows best in warm climates with low humidity. It prefers black soil or loamy soil and needs moderate rainfall.",
    },
    CropInfo {
        name: "mungbean",
        description: "Mung beans (green gram) thrive in warm, moist climates with moderate rainfall and well-drained sandy loam soil.",
    },
    CropInfo {
        name: "apple",
        description: "Apples grow in cool, temperate climates with cold winters. They need well-drained loamy soil and plenty of sunlight.",
    },
    CropInfo {
        name: "banana",
        description: "Bananas require a warm, humid climate with high rainfall and rich loamy soil. They need consistent moisture throughout growth.",
    },
    CropInfo {
        name: "mango",
        description: "Mango trees thrive in tropical and subtropical climates. They prefer dry weather during flowering and well-drained soil.",
    },
    CropInfo {
        name: "coffee",
        description: "Coffee grows in tropical regions with moderate sunlight, high humidity, and well-drained soil rich in organic matter.",
    },
];

/// Looks up the description for a crop.
///
/// Matching ignores case and surrounding whitespace. Unknown crops yield
/// [`FALLBACK_DESCRIPTION`].
#[must_use]
pub fn describe(crop_name: &str) -> &'static str {
    let wanted: String = crop_name.trim().to_lowercase();
    CROP_INFO
        .iter()
        .find(|info| info.name == wanted)
        .map_or(FALLBACK_DESCRIPTION, |info| info.description)
}

/// Returns the names of all crops in the knowledge base.
pub fn known_crops() -> impl Iterator<Item = &'static str> {
    CROP_INFO.iter().map(|info| info.name)
}
