//! Localized message strings.
//!
//! User-facing texts carry one variant per supported locale. The operator
//! surface (command confirmations, usage and denial messages) is
//! intentionally single-language, matching the audience of one.

use corso_core::{Locale, Plan, PlanOffer, SupportContacts, UserId, UserRecord};
use corso_error::{CommandErrorKind, CorsoError, CorsoErrorKind, LedgerErrorKind};

/// Label of the language shortcut button, the same in every locale.
pub(crate) const MENU_LANGUAGE: &str = "🌐 Language / Забон";

pub(crate) fn welcome(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => {
            "Ассалому алайкум!\n\nЯ бот *Corso*.\nПомогу выбрать тариф, оформить покупку и получить доступ к урокам.\n\nВыберите язык и используйте меню ниже."
        }
        Locale::Tj => {
            "Ассалому алайкум!\n\nМан боти *Corso* ҳастам.\nБа шумо барои интихоби тариф, харид ва гирифтани дастрасӣ ба дарсҳо кӯмак мекунам.\n\nЗабонро интихоб кунед ва аз меню истифода баред."
        }
    }
}

pub(crate) fn choose_locale(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "🌐 Выберите язык:",
        Locale::Tj => "🌐 Забонро интихоб кунед:",
    }
}

pub(crate) fn locale_set(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "✅ Язык установлен: Русский",
        Locale::Tj => "✅ Забон интихоб шуд: Тоҷикӣ",
    }
}

pub(crate) fn menu_courses(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "📚 Курсы",
        Locale::Tj => "📚 Дарсҳо",
    }
}

pub(crate) fn menu_buy(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "💳 Купить доступ",
        Locale::Tj => "💳 Хариди дастрасӣ",
    }
}

pub(crate) fn menu_account(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "📊 Мой аккаунт",
        Locale::Tj => "📊 Ҳисоби ман",
    }
}

pub(crate) fn menu_support(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "👨‍💻 Поддержка",
        Locale::Tj => "👨‍💻 Дастгирӣ",
    }
}

pub(crate) fn buy_title(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => {
            "💳 *Купить доступ*\n\nВыбери тариф:\n• BASIC — база\n• PRO — база + разборы\n• VIP — всё + личное сопровождение\n\nНажми кнопку тарифа ниже:"
        }
        Locale::Tj => {
            "💳 *Хариди дастрасӣ*\n\nТарифро интихоб кунед:\n• BASIC — асосӣ\n• PRO — асосӣ + таҳлилҳо\n• VIP — ҳама чиз + ҳамроҳии шахсӣ\n\nТугмаи тарифро зер кунед:"
        }
    }
}

pub(crate) fn choose_plan_below(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "Выбери тариф кнопками ниже:",
        Locale::Tj => "Тарифро бо тугмаҳои поён интихоб кунед:",
    }
}

pub(crate) fn courses(locale: Locale, site_url: &str) -> String {
    match locale {
        Locale::Ru => format!(
            "📚 *Курсы Corso*\n\nМы обучаем криптовалюте с нуля — простым языком, пошагово и с упором на безопасность.\n\n🌐 Полная программа: {site_url}\n\nДоступ к урокам открывается *после покупки*.\nНажми «💳 Купить доступ» и выбери тариф."
        ),
        Locale::Tj => format!(
            "📚 *Дарсҳои Corso*\n\nМо крипторо аз сифр меомӯзонем — бо забони содда, қадам ба қадам ва бо диққати калон ба амният.\n\n🌐 Барномаи пурра: {site_url}\n\nДастрасӣ ба дарсҳо *пас аз харид* кушода мешавад.\n«💳 Хариди дастрасӣ»-ро пахш кунед ва тарифро интихоб кунед."
        ),
    }
}

pub(crate) fn plan_details(locale: Locale, offer: &PlanOffer) -> String {
    let name = offer.name.get(locale);
    let access = offer.access.get(locale);
    let promo = offer.promo;
    let regular = offer.regular;
    let currency = &offer.currency;
    match locale {
        Locale::Ru => format!(
            "*{name}*\n\n⏳ Доступ: *{access}*\n💰 Цена: *{promo}{currency}* (акция) вместо *{regular}{currency}*\n\nПосле оплаты нажми кнопку ниже: «✅ I paid / Ман пардохт кардам»."
        ),
        Locale::Tj => format!(
            "*{name}*\n\n⏳ Дастрасӣ: *{access}*\n💰 Нарх: *{promo}{currency}* (аксия) ба ҷои *{regular}{currency}*\n\nПас аз пардохт тугмаи поёнро пахш кунед: «✅ I paid / Ман пардохт кардам»."
        ),
    }
}

pub(crate) fn no_access(locale: Locale, site_url: &str) -> String {
    match locale {
        Locale::Ru => format!(
            "Доступ к урокам открывается *после покупки*.\nНажми «💳 Купить доступ» и выбери тариф.\n\n🌐 Полная информация: {site_url}"
        ),
        Locale::Tj => format!(
            "Дастрасӣ ба дарсҳо *пас аз харид* кушода мешавад.\n«💳 Хариди дастрасӣ»-ро пахш кунед ва тарифро интихоб кунед.\n\n🌐 Маълумоти пурра: {site_url}"
        ),
    }
}

pub(crate) fn access_active(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => {
            "✅ Доступ активен.\n\nНапиши, что именно хочешь изучить сейчас, и начнём."
        }
        Locale::Tj => {
            "✅ Дастрасӣ фаъол аст.\n\nНавиштед, ки ҳозир чиро омӯхтан мехоҳед, ва оғоз мекунем."
        }
    }
}

pub(crate) fn support(locale: Locale, contacts: &SupportContacts, site_url: &str) -> String {
    let telegram = &contacts.telegram;
    let whatsapp = &contacts.whatsapp;
    match locale {
        Locale::Ru => format!(
            "👨‍💻 *Поддержка*\n\nОпиши вопрос одним сообщением.\n\n📌 Telegram: {telegram}\n📌 WhatsApp: {whatsapp}\n🌐 Подробнее на сайте: {site_url}"
        ),
        Locale::Tj => format!(
            "👨‍💻 *Дастгирӣ*\n\nСаволи худро бо як паём нависед.\n\n📌 Telegram: {telegram}\n📌 WhatsApp: {whatsapp}\n🌐 Маълумоти бештар: {site_url}"
        ),
    }
}

pub(crate) fn account(
    locale: Locale,
    user: UserId,
    record: &UserRecord,
    approved: Option<(Plan, &PlanOffer)>,
    site_url: &str,
) -> String {
    let first_name = record.first_name.as_deref().unwrap_or("—");
    let handle = record.handle.as_deref().unwrap_or("—");
    let (plan_name, status, access) = match approved {
        Some((_, offer)) => (
            offer.name.get(locale).to_string(),
            match locale {
                Locale::Ru => "✅ доступ открыт",
                Locale::Tj => "✅ дастрасӣ кушода аст",
            }
            .to_string(),
            offer.access.get(locale).to_string(),
        ),
        None => (
            "—".to_string(),
            match locale {
                Locale::Ru => "⛔ доступ не активирован",
                Locale::Tj => "⛔ дастрасӣ фаъол нест",
            }
            .to_string(),
            "—".to_string(),
        ),
    };
    match locale {
        Locale::Ru => format!(
            "📊 *Мой аккаунт*\n\n👤 Имя: *{first_name}*\n🔗 Handle: *@{handle}*\n🆔 ID: `{user}`\n\n📌 Тариф: *{plan_name}*\n📍 Статус: *{status}*\n⏳ Доступ: *{access}*\n\n🌐 Полная информация: {site_url}"
        ),
        Locale::Tj => format!(
            "📊 *Ҳисоби ман*\n\n👤 Ном: *{first_name}*\n🔗 Handle: *@{handle}*\n🆔 ID: `{user}`\n\n📌 Тариф: *{plan_name}*\n📍 Ҳолат: *{status}*\n⏳ Дастрасӣ: *{access}*\n\n🌐 Маълумоти пурра: {site_url}"
        ),
    }
}

pub(crate) fn request_received(locale: Locale, site_url: &str) -> String {
    match locale {
        Locale::Ru => format!(
            "✅ Заявка отправлена на проверку.\n\nАдминистратор проверит оплату и откроет доступ.\nЕсли нужно — напиши в «👨‍💻 Поддержка» и отправь подтверждение оплаты.\n\n🌐 Детали: {site_url}"
        ),
        Locale::Tj => format!(
            "✅ Дархост ба санҷиш фиристода шуд.\n\nАдмин пардохтро месанҷад ва дастрасиро мекушояд.\nАгар лозим бошад — ба «👨‍💻 Дастгирӣ» нависед ва далели пардохтро фиристед.\n\n🌐 Тафсилот: {site_url}"
        ),
    }
}

pub(crate) fn payment_approved(locale: Locale, plan_name: &str) -> String {
    match locale {
        Locale::Ru => format!(
            "✅ *Оплата подтверждена!*\n\nТариф: *{plan_name}*\nДоступ к урокам открыт.\n\nНажми «📚 Курсы» и начинай обучение."
        ),
        Locale::Tj => format!(
            "✅ *Пардохт тасдиқ шуд!*\n\nТариф: *{plan_name}*\nДастрасӣ ба дарсҳо кушода шуд.\n\n«📚 Дарсҳо»-ро пахш кунед ва омӯзишро оғоз намоед."
        ),
    }
}

pub(crate) fn payment_denied(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => {
            "⛔ *Статус оплаты: отказано*\n\nЕсли это ошибка — напиши в «👨‍💻 Поддержка» и прикрепи подтверждение оплаты."
        }
        Locale::Tj => {
            "⛔ *Ҳолати пардохт: рад шуд*\n\nАгар хато бошад — ба «👨‍💻 Дастгирӣ» нависед ва далели пардохтро фиристед."
        }
    }
}

pub(crate) fn group_invite(locale: Locale) -> &'static str {
    match locale {
        Locale::Ru => "🔗 Ссылка на вашу группу:",
        Locale::Tj => "🔗 Истинод ба гурӯҳи шумо:",
    }
}

pub(crate) fn group_button(locale: Locale, plan: Plan) -> String {
    let word = match locale {
        Locale::Ru => "Группа",
        Locale::Tj => "Гурӯҳи",
    };
    format!("🔗 {word} {plan}")
}

pub(crate) fn help_text() -> &'static str {
    "Команды:\n/start — запуск\n/help — помощь\n/approve USER_ID PLAN — подтвердить оплату (operator)\n/deny USER_ID PLAN — отказать (operator)\n/broadcast ТЕКСТ — рассылка (operator)"
}

pub(crate) fn approve_confirm(user: UserId, plan: Plan) -> String {
    format!("✅ Подтверждено: {user} → {plan}")
}

pub(crate) fn deny_confirm(user: UserId, plan: Plan) -> String {
    format!("⛔ Отказано: {user} → {plan}")
}

pub(crate) fn broadcast_done(sent: usize, failed: usize) -> String {
    format!("Рассылка завершена. Отправлено: {sent}, ошибок: {failed}")
}

/// One-line user summary for operator notifications.
pub(crate) fn user_brief(user: UserId, record: &UserRecord) -> String {
    let name = record.first_name.as_deref().unwrap_or("—");
    let handle = record
        .handle
        .as_deref()
        .map(|h| format!("@{h}"))
        .unwrap_or_else(|| "—".to_string());
    format!("{name} | {handle} | ID: {user}")
}

pub(crate) fn operator_new_user(brief: &str) -> String {
    format!("🆕 /start: *{brief}*")
}

pub(crate) fn operator_opened_buy(brief: &str) -> String {
    format!("💳 Открыл покупку: *{brief}*")
}

pub(crate) fn operator_selected_plan(brief: &str, plan: Plan, offer: &PlanOffer) -> String {
    format!(
        "📌 Выбрал тариф: *{plan}* | *{brief}*\nЦена акция: *{promo}{currency}* → обычно *{regular}{currency}*",
        promo = offer.promo,
        regular = offer.regular,
        currency = offer.currency,
    )
}

pub(crate) fn operator_new_request(
    brief: &str,
    user: UserId,
    plan: Plan,
    offer: &PlanOffer,
) -> String {
    format!(
        "🧾 *Новая заявка на оплату*\n\n👤 {brief}\n📦 Тариф: *{name}*\n💰 Цена: *{promo}{currency}* (акция) / *{regular}{currency}* (обычно)\n\nКоманды:\n`/approve {user} {plan}`\n`/deny {user} {plan}`",
        name = offer.name.get(Locale::Ru),
        promo = offer.promo,
        regular = offer.regular,
        currency = offer.currency,
    )
}

/// Reply text for a rejected command: validation, authorization or an
/// illegal ledger transition. Deliberately generic on authorization.
pub(crate) fn fault(error: &CorsoError) -> String {
    match error.kind() {
        CorsoErrorKind::Command(command) => match &command.kind {
            CommandErrorKind::Unauthorized => "Нет доступа.".to_string(),
            CommandErrorKind::MissingArguments { usage } => format!("Использование: {usage}"),
            CommandErrorKind::UnknownPlan(_) => "PLAN должен быть BASIC/PRO/VIP".to_string(),
            CommandErrorKind::InvalidUserId(_) => "USER_ID должен быть числом".to_string(),
            CommandErrorKind::UnknownCommand(_) => {
                "Неизвестная команда. Список: /help".to_string()
            }
        },
        CorsoErrorKind::Ledger(ledger) => match &ledger.kind {
            LedgerErrorKind::InvalidTransition { from, to, plan } => {
                format!("⛔ Недопустимый переход для {plan}: {from} → {to}. Нужна активная заявка.")
            }
        },
        _ => "Ошибка. Попробуйте ещё раз.".to_string(),
    }
}
