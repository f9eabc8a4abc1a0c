//! Western (tropical) and Chinese zodiac lookup tables.
//!
//! Both catalogs are compile-time constants. The Western table is scanned in
//! order with inclusive `(month, day)` ranges; Capricorn is the single range
//! that wraps the year boundary. The Chinese table is indexed by the 12-year
//! cycle anchored at 1900 (Rat).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A `(month, day)` pair, compared lexicographically.
pub type MonthDay = (u32, u32);

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct WesternSign {
    /// Stable latin identifier, e.g. `"capricorn"`.
    pub key: &'static str,
    pub name: &'static str,
    pub start: MonthDay,
    pub end: MonthDay,
    pub element: &'static str,
    pub planet: &'static str,
    pub traits: &'static str,
}

impl WesternSign {
    /// True when the range runs past December 31 into January.
    pub fn wraps(&self) -> bool {
        self.start > self.end
    }

    /// Inclusive membership test for a `(month, day)` pair.
    pub fn contains(&self, md: MonthDay) -> bool {
        if self.wraps() {
            md >= self.start || md <= self.end
        } else {
            self.start <= md && md <= self.end
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ChineseSign {
    pub key: &'static str,
    pub name: &'static str,
    pub traits: &'static str,
}

pub static WESTERN_ZODIAC: [WesternSign; 12] = [
    WesternSign {
        key: "aries",
        name: "الحمل",
        start: (3, 21),
        end: (4, 19),
        element: "النار",
        planet: "المريخ",
        traits: "حيوي، جريء، يعشق التحديات ويقود المبادرات.",
    },
    WesternSign {
        key: "taurus",
        name: "الثور",
        start: (4, 20),
        end: (5, 20),
        element: "الأرض",
        planet: "الزهرة",
        traits: "صبور، وفيّ، يبحث عن الاستقرار والجمال.",
    },
    WesternSign {
        key: "gemini",
        name: "الجوزاء",
        start: (5, 21),
        end: (6, 20),
        element: "الهواء",
        planet: "عطارد",
        traits: "اجتماعي، فضولي، سريع التعلّم والتفكير.",
    },
    WesternSign {
        key: "cancer",
        name: "السرطان",
        start: (6, 21),
        end: (7, 22),
        element: "الماء",
        planet: "القمر",
        traits: "حساس، ودي، يحمي من يحبهم ويعتني بالتفاصيل.",
    },
    WesternSign {
        key: "leo",
        name: "الأسد",
        start: (7, 23),
        end: (8, 22),
        element: "النار",
        planet: "الشمس",
        traits: "كاريزمي، قيادي، كريم ويتألق في الأضواء.",
    },
    WesternSign {
        key: "virgo",
        name: "العذراء",
        start: (8, 23),
        end: (9, 22),
        element: "الأرض",
        planet: "عطارد",
        traits: "منظم، عملي، دقيق ويحب خدمة الآخرين.",
    },
    WesternSign {
        key: "libra",
        name: "الميزان",
        start: (9, 23),
        end: (10, 22),
        element: "الهواء",
        planet: "الزهرة",
        traits: "دبلوماسي، متوازن، يسعى للسلام والانسجام.",
    },
    WesternSign {
        key: "scorpio",
        name: "العقرب",
        start: (10, 23),
        end: (11, 21),
        element: "الماء",
        planet: "بلوتو",
        traits: "عميق، شغوف، قوي الإرادة ووفي للغاية.",
    },
    WesternSign {
        key: "sagittarius",
        name: "القوس",
        start: (11, 22),
        end: (12, 21),
        element: "النار",
        planet: "المشتري",
        traits: "مغامر، صريح، متفائل ومحب للمعرفة.",
    },
    WesternSign {
        key: "capricorn",
        name: "الجدي",
        start: (12, 22),
        end: (1, 19),
        element: "الأرض",
        planet: "زحل",
        traits: "طموح، مسؤول، منضبط ويخطط للمستقبل.",
    },
    WesternSign {
        key: "aquarius",
        name: "الدلو",
        start: (1, 20),
        end: (2, 18),
        element: "الهواء",
        planet: "أورانوس",
        traits: "مبتكر، إنساني، مستقل ويحب الحرية.",
    },
    WesternSign {
        key: "pisces",
        name: "الحوت",
        start: (2, 19),
        end: (3, 20),
        element: "الماء",
        planet: "نبتون",
        traits: "خيالي، رحيم، يتواصل مع الآخرين بحدسه العالي.",
    },
];

pub static CHINESE_ZODIAC: [ChineseSign; 12] = [
    ChineseSign {
        key: "rat",
        name: "الفأر",
        traits: "ذكي، ودود، سريع البديهة.",
    },
    ChineseSign {
        key: "ox",
        name: "الثور",
        traits: "مثابر، عملي، يعتمد عليه.",
    },
    ChineseSign {
        key: "tiger",
        name: "النمر",
        traits: "شجاع، ملهم، محب للمغامرة.",
    },
    ChineseSign {
        key: "rabbit",
        name: "الأرنب",
        traits: "لطيف، حذر، دبلوماسي.",
    },
    ChineseSign {
        key: "dragon",
        name: "التنين",
        traits: "طموح، واثق، يمتلك حضورًا قويًا.",
    },
    ChineseSign {
        key: "snake",
        name: "الثعبان",
        traits: "حكيم، متأمل، عميق التفكير.",
    },
    ChineseSign {
        key: "horse",
        name: "الحصان",
        traits: "مفعم بالحيوية، محبوب، نشيط.",
    },
    ChineseSign {
        key: "goat",
        name: "الماعز",
        traits: "مرهف، فني، متعاطف.",
    },
    ChineseSign {
        key: "monkey",
        name: "القرد",
        traits: "إبداعي، اجتماعي، مرن.",
    },
    ChineseSign {
        key: "rooster",
        name: "الديك",
        traits: "منظم، صريح، دقيق.",
    },
    ChineseSign {
        key: "dog",
        name: "الكلب",
        traits: "مخلص، أمين، حريص.",
    },
    ChineseSign {
        key: "pig",
        name: "الخنزير",
        traits: "كريم، متسامح، محب للحياة.",
    },
];

/// First year of the cycle, a year of the Rat.
const CHINESE_CYCLE_ANCHOR: i32 = 1900;

/// Western sign for the month and day of `date`.
///
/// The table covers every day of the year, so the Aries fallback is never hit
/// for a real date.
pub fn western_zodiac(date: NaiveDate) -> &'static WesternSign {
    let md = (date.month(), date.day());
    WESTERN_ZODIAC
        .iter()
        .find(|sign| sign.contains(md))
        .unwrap_or(&WESTERN_ZODIAC[0])
}

/// Position of `year` in the 12-year cycle. Always in `0..12`, including for
/// years before 1900.
pub fn chinese_cycle_index(year: i32) -> usize {
    (i64::from(year) - i64::from(CHINESE_CYCLE_ANCHOR)).rem_euclid(12) as usize
}

/// Chinese sign for a Gregorian year.
pub fn chinese_zodiac(year: i32) -> &'static ChineseSign {
    &CHINESE_ZODIAC[chinese_cycle_index(year)]
}
