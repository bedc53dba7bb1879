// Single source of truth for all default values.

// --- Scoring: signal weights (must sum to 1.0) ---
pub const DEFAULT_WEIGHT_HINT_REQUEST_FREQUENCY: f64 = 0.35;
pub const DEFAULT_WEIGHT_ERROR_RECOVERY_SPEED: f64 = 0.25;
pub const DEFAULT_WEIGHT_TRANSFER_SUCCESS_RATE: f64 = 0.20;
pub const DEFAULT_WEIGHT_METACOGNITIVE_ACCURACY: f64 = 0.10;
pub const DEFAULT_WEIGHT_TASK_COMPLETION_EFFICIENCY: f64 = 0.05;
pub const DEFAULT_WEIGHT_HELP_SEEKING_QUALITY: f64 = 0.03;
pub const DEFAULT_WEIGHT_SELF_ASSESSMENT_ALIGNMENT: f64 = 0.02;

// --- Ledger ---
pub const DEFAULT_INSERTION_DECAY_RATE: f64 = 0.1;
pub const DEFAULT_VARIANCE_WINDOW: usize = 10;
pub const DEFAULT_TREND_WINDOW: usize = 5;
pub const DEFAULT_IMPROVING_SLOPE: f64 = 0.05;
pub const DEFAULT_DECLINING_SLOPE: f64 = -0.05;
pub const DEFAULT_STAGNANT_BAND: f64 = 0.01;
pub const DEFAULT_SPARSE_EVIDENCE_FLOOR: usize = 3;
pub const DEFAULT_MAX_EXCLUSION_SHARE: f64 = 0.25;
pub const DEFAULT_STALE_AFTER_DAYS: u32 = 30;

// --- Plateau ---
pub const DEFAULT_PLATEAU_MIN_EVIDENCE: usize = 10;
pub const DEFAULT_PLATEAU_VARIANCE_THRESHOLD: f64 = 0.01;
pub const DEFAULT_PLATEAU_IMPROVEMENT_THRESHOLD: f64 = 0.01;
pub const DEFAULT_PLATEAU_RISK_THRESHOLD: f64 = 0.7;

// --- Gaming detection ---
pub const DEFAULT_HIGH_RISK_THRESHOLD: f64 = 0.7;
pub const DEFAULT_RAPID_RESPONSE_FLOOR_MS: u64 = 2_000;
pub const DEFAULT_OUTLIER_SIGMA: f64 = 3.0;
pub const DEFAULT_ANSWER_CHURN_THRESHOLD: u32 = 6;
pub const DEFAULT_UNIFORM_TIMING_CV: f64 = 0.08;
pub const DEFAULT_GAMING_MIN_BATCH: usize = 5;

// --- Advancement: level 1 -> 2 ---
pub const DEFAULT_L1_MIN_EVIDENCE: usize = 5;
pub const DEFAULT_L1_MIN_PERFORMANCE: f64 = 0.60;
pub const DEFAULT_L1_MIN_CONFIDENCE: f64 = 0.50;
pub const DEFAULT_L1_MIN_WINDOW_DAYS: u32 = 3;
pub const DEFAULT_L1_MIN_SIGNAL_STRENGTH: f64 = 0.50;

// --- Advancement: level 2 -> 3 ---
pub const DEFAULT_L2_MIN_EVIDENCE: usize = 10;
pub const DEFAULT_L2_MIN_PERFORMANCE: f64 = 0.70;
pub const DEFAULT_L2_MIN_CONFIDENCE: f64 = 0.60;
pub const DEFAULT_L2_MIN_WINDOW_DAYS: u32 = 7;
pub const DEFAULT_L2_MIN_SIGNAL_STRENGTH: f64 = 0.60;

// --- Advancement: level 3 -> 4 ---
pub const DEFAULT_L3_MIN_EVIDENCE: usize = 15;
pub const DEFAULT_L3_MIN_PERFORMANCE: f64 = 0.85;
pub const DEFAULT_L3_MIN_CONFIDENCE: f64 = 0.80;
pub const DEFAULT_L3_MIN_WINDOW_DAYS: u32 = 14;
pub const DEFAULT_L3_MIN_SIGNAL_STRENGTH: f64 = 0.80;

// --- Certification ---
pub const DEFAULT_CERT_MIN_LEVEL: u8 = 3;
pub const DEFAULT_CERT_MIN_EVIDENCE: usize = 20;
pub const DEFAULT_CERT_MIN_PERFORMANCE: f64 = 0.90;
pub const DEFAULT_CERT_MIN_CONFIDENCE: f64 = 0.90;
pub const DEFAULT_CERT_WINDOW_DAYS: u32 = 21;
pub const DEFAULT_CERT_WINDOW_MIN_RECORDS: usize = 5;
pub const DEFAULT_CERT_WINDOW_MIN_PERFORMANCE: f64 = 0.85;
pub const DEFAULT_CERT_TOP_EVIDENCE: usize = 10;
