use std::collections::{HashMap, HashSet};

// Emotion dimensions shared by every vector lexicon, in column order
pub const NUM_EMOTIONS: usize = 10;
pub const EMOTION_NAMES: [&str; NUM_EMOTIONS] = [
    "anger",
    "anticipation",
    "disgust",
    "fear",
    "joy",
    "negative",
    "positive",
    "sadness",
    "surprise",
    "trust",
];

pub type EmotionVector = [f32; NUM_EMOTIONS];

// word -> emotion vector
pub type VectorMap = HashMap<String, EmotionVector>;
// word or bigram -> polarity score
pub type ScalarMap = HashMap<String, f32>;
// word -> "positive" / anything else
pub type LabelMap = HashMap<String, String>;
pub type WordList = HashSet<String>;

// One value per feature, in schema order
pub type FeatureVector = Vec<f32>;
pub type NamedFeatures = Vec<(String, f32)>;
