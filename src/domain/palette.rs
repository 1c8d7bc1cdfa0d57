// Dashboard color constants

/// Page theme.
pub const BACKGROUND: &str = "#000000";
pub const TEXT: &str = "#FFFFFF";

/// Categorical palette for entity coloring (plotly's "Alphabet" set).
pub const ALPHABET: &[&str] = &[
    "#AA0DFE", "#3283FE", "#85660D", "#782AB6", "#565656", "#1C8356",
    "#16FF32", "#F7E1A0", "#E2E2E2", "#1CBE4F", "#C4451C", "#DEA0FD",
    "#FE00FA", "#325A9B", "#FEAF16", "#F8A19F", "#90AD1C", "#F6222E",
    "#1CFFCE", "#2ED9FF", "#B10DA1", "#C075A6", "#FC1CBF", "#B00068",
    "#FBE426", "#FA0087",
];

/// Continuous scale for the geo map's GDP color channel.
pub const CONTINUOUS_SCALE: &str = "Plasma";
