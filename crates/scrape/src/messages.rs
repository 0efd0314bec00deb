//! User-facing reply texts (Hebrew, as shown to the site's audience).

pub const PROMPT: &str = "על איזה נייר ערך תרצה מידע? אנא ציין את שמו או מספרו.";
pub const NO_MATCH: &str = "לא מצאתי תוצאה תואמת לשם שסיפקת.";
pub const UNRECOGNIZED_TYPE: &str = "לא זוהה סוג נייר ערך.";
pub const GENERAL_INFO_MISSING: &str = "לא נמצאה סקירה כללית.";

// Error prefixes; the failure reason is appended.
pub const SEARCH_ERROR: &str = "שגיאה בחיפוש נייר ערך: ";
pub const GENERAL_INFO_ERROR: &str = "שגיאה בגישה לנתונים כלליים: ";
pub const HOLDINGS_ERROR: &str = "שגיאה בשליפת אחזקות: ";
pub const PERFORMANCE_ERROR: &str = "שגיאה בביצועים: ";
