/// Generated notch coefficients: one second-order section tuned to
/// reject 874 Hz at fs = 48 kHz, in the flat `{b0, b1, b2, a1, a2}`
/// packing emitted by the offline design tool
/// (`--freq 874 --fs 48000 --rho 0.9 --alpha 0.3`).
///
/// The denominator values are stored as the tool emitted them; see
/// `SosCascade` for the sign convention the evaluator applies.
pub const NOTCH_874_48K: [f32; 5] = [
    1.0,
    -1.9869254612738059,
    1.0,
    1.8340850411758207,
    -0.85384615384615392
];
