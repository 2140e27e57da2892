//! Immutable plan pricing and descriptors.

use crate::{Locale, Plan};
use serde::{Deserialize, Serialize};

/// A string with one variant per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// Russian variant
    pub ru: String,
    /// Tajik variant
    pub tj: String,
}

impl LocalizedText {
    /// The variant for a locale.
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ru => &self.ru,
            Locale::Tj => &self.tj,
        }
    }
}

/// One plan's immutable offer: prices, currency and access descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOffer {
    /// Display name shown to users
    pub name: LocalizedText,
    /// Promotional price, whole currency units
    pub promo: u32,
    /// Regular price, whole currency units
    pub regular: u32,
    /// Currency symbol
    pub currency: String,
    /// Access-duration descriptor ("3 months", "permanent access", ...)
    pub access: LocalizedText,
}

/// The full plan table, loaded once at startup and treated as immutable
/// reference data by every component.
///
/// # Examples
///
/// ```
/// use corso_core::{Locale, Plan, PlanCatalog};
///
/// let catalog = PlanCatalog::default();
/// let offer = catalog.offer(Plan::Basic);
/// assert_eq!(offer.promo, 99);
/// assert!(offer.promo < offer.regular);
/// assert!(!offer.access.get(Locale::Tj).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCatalog {
    /// BASIC tier offer
    pub basic: PlanOffer,
    /// PRO tier offer
    pub pro: PlanOffer,
    /// VIP tier offer
    pub vip: PlanOffer,
}

impl PlanCatalog {
    /// The offer for a plan.
    pub fn offer(&self, plan: Plan) -> &PlanOffer {
        match plan {
            Plan::Basic => &self.basic,
            Plan::Pro => &self.pro,
            Plan::Vip => &self.vip,
        }
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self {
            basic: PlanOffer {
                name: LocalizedText {
                    ru: "BASIC — база".to_string(),
                    tj: "BASIC — асосӣ".to_string(),
                },
                promo: 99,
                regular: 149,
                currency: "€".to_string(),
                access: LocalizedText {
                    ru: "3 месяца".to_string(),
                    tj: "3 моҳ".to_string(),
                },
            },
            pro: PlanOffer {
                name: LocalizedText {
                    ru: "PRO — база + разборы".to_string(),
                    tj: "PRO — асосӣ + таҳлилҳо".to_string(),
                },
                promo: 249,
                regular: 349,
                currency: "€".to_string(),
                access: LocalizedText {
                    ru: "вечный доступ".to_string(),
                    tj: "дастрасии доимӣ".to_string(),
                },
            },
            vip: PlanOffer {
                name: LocalizedText {
                    ru: "VIP — всё + личная поддержка".to_string(),
                    tj: "VIP — ҳама чиз + дастгирии шахсӣ".to_string(),
                },
                promo: 399,
                regular: 499,
                currency: "€".to_string(),
                access: LocalizedText {
                    ru: "вечный доступ + сопровождение".to_string(),
                    tj: "дастрасии доимӣ + ҳамроҳӣ".to_string(),
                },
            },
        }
    }
}
