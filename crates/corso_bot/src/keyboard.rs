//! Keyboard markup builders.

use crate::texts;
use crate::{InlineButton, Keyboard};
use corso_core::{Locale, Plan};
use strum::IntoEnumIterator;

/// The persistent main menu.
pub(crate) fn main_menu(locale: Locale) -> Keyboard {
    Keyboard::Reply(vec![
        vec![
            texts::menu_courses(locale).to_string(),
            texts::menu_buy(locale).to_string(),
        ],
        vec![
            texts::menu_account(locale).to_string(),
            texts::menu_support(locale).to_string(),
        ],
        vec![texts::MENU_LANGUAGE.to_string()],
    ])
}

/// Inline locale chooser.
pub(crate) fn locale_chooser() -> Keyboard {
    Keyboard::Inline(vec![vec![
        InlineButton::callback("Русский", "lang:ru"),
        InlineButton::callback("Тоҷикӣ", "lang:tj"),
    ]])
}

/// Inline plan chooser plus a website link.
pub(crate) fn plan_chooser(site_url: &str) -> Keyboard {
    let plans = Plan::iter()
        .map(|plan| InlineButton::callback(plan.to_string(), format!("plan:{plan}")))
        .collect();
    Keyboard::Inline(vec![
        plans,
        vec![InlineButton::url("🌐 Website", site_url)],
    ])
}

/// Inline payment confirmation for one plan.
pub(crate) fn payment(plan: Plan, site_url: &str) -> Keyboard {
    Keyboard::Inline(vec![
        vec![InlineButton::callback(
            "✅ I paid / Ман пардохт кардам",
            format!("paid:{plan}"),
        )],
        vec![InlineButton::url("🌐 Website", site_url)],
    ])
}

/// Inline community invite for an approved plan.
pub(crate) fn group_invite(locale: Locale, plan: Plan, link: &str) -> Keyboard {
    Keyboard::Inline(vec![vec![InlineButton::url(
        texts::group_button(locale, plan),
        link,
    )]])
}
