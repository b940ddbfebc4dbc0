//! The business's price list and company copy.
//!
//! The greeting, the tariff overview and the FOP 1 tariff are the published
//! price list. Everything from FOP 2 onward is draft copy that the business
//! has not confirmed yet; edit it here, not in the router.

use super::{ButtonRef, MenuId, MenuNode};

pub(crate) const INSTAGRAM_URL: &str = "https://www.instagram.com/reliable_outsorsing_company/";

const MAIN_TEXT: &str = "Вас вітає\n\
*Reliable Outsorsing Company* –\n\
бухгалтерська аутсорсингова компанія";

const PRICES_TEXT: &str = "💼 *Тарифи на бухгалтерське обслуговування ФОП*\n\
🧾 Кожен тариф включає базові послуги: підготовку звітності, контроль платежів, консультації та перевірку електронного кабінету.\n\
👇 Оберіть потрібний тариф нижче:";

const FOP1_TEXT: &str = "👤 *ФОП 1 група (єдиний податок)*\n\
*Базовий тариф:* 400 грн/міс\n\
\n\
*Дозволена діяльність:*\n\
• Продаж товарів із торгових місць на ринках\n\
• Надання побутових послуг населенню\n\
• Можливість працювати без використання РРО\n\
• Без найманих працівників\n\
\n\
*У тариф входить:*\n\
✅ Розрахунок доходу та ведення Книги обліку\n\
✅ Контроль ліміту доходу відповідно до групи\n\
✅ Нагадування про сплату податків, формування реквізитів, контроль оплат\n\
✅ Можливість здійснення оплат податків бухгалтером (за доступом)\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Подання податкової звітності, заяв, листів, запитів\n\
✅ Відповіді на запитання в процесі супроводу\n\
\n\
📌 *Додатково:* при використанні РРО та/або еквайрингу — +100 грн/міс";

// Unconfirmed draft copy below: prices and scope need sign-off.

const FOP2_TEXT: &str = "👤 *ФОП 2 група (єдиний податок)*\n\
*Базовий тариф:* 400 грн/міс\n\
\n\
*Дозволена діяльність:*\n\
• Надання послуг платникам єдиного податку та населенню\n\
• Виробництво та/або продаж товарів\n\
• Діяльність у сфері ресторанного господарства\n\
• До 10 найманих працівників\n\
\n\
*У тариф входить:*\n\
✅ Розрахунок доходу та ведення Книги обліку\n\
✅ Контроль ліміту доходу відповідно до групи\n\
✅ Нагадування про сплату податків, формування реквізитів, контроль оплат\n\
✅ Можливість здійснення оплат податків бухгалтером (за доступом)\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Подання податкової звітності, заяв, листів, запитів\n\
✅ Відповіді на запитання в процесі супроводу\n\
\n\
📌 *Додатково:* при використанні РРО та/або еквайрингу — +100 грн/міс\n\
📌 *Наймані працівники:* див. тариф «ФОП з працівниками»";

const FOP3_NO_VAT_TEXT: &str = "👤 *ФОП 3 група (5%, без ПДВ)*\n\
*Базовий тариф:* 400 грн/міс\n\
\n\
*Особливості:*\n\
• Ставка єдиного податку — 5% від доходу\n\
• Робота з фізичними та юридичними особами\n\
• Без обмежень щодо кількості найманих працівників\n\
\n\
*У тариф входить:*\n\
✅ Розрахунок доходу та ведення Книги обліку\n\
✅ Контроль ліміту доходу відповідно до групи\n\
✅ Розрахунок єдиного податку та ЄСВ\n\
✅ Нагадування про сплату податків, формування реквізитів, контроль оплат\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Підготовка та подання квартальної декларації платника єдиного податку\n\
✅ Відповіді на запитання в процесі супроводу\n\
\n\
📌 *Додатково:* при використанні РРО та/або еквайрингу — +100 грн/міс";

const FOP3_VAT_TEXT: &str = "👤 *ФОП 3 група (3%, платник ПДВ)*\n\
*Базовий тариф:* від 3500 грн/міс\n\
\n\
*Особливості:*\n\
• Ставка єдиного податку — 3% від доходу + ПДВ\n\
• Реєстрація податкових накладних в ЄРПН\n\
• Щомісячна звітність з ПДВ\n\
\n\
*У тариф входить:*\n\
✅ Облік доходів, ведення Книги обліку\n\
✅ Складання та реєстрація податкових накладних і розрахунків коригування\n\
✅ Контроль реєстраційних лімітів ПДВ (СЕА ПДВ)\n\
✅ Підготовка та подання декларацій з ПДВ\n\
✅ Підготовка та подання декларації платника єдиного податку\n\
✅ Нагадування про сплату податків, формування реквізитів, контроль оплат\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Відповіді на запитання в процесі супроводу\n\
\n\
📌 *Вартість* залежить від кількості операцій на місяць";

const FOP_STAFF_TEXT: &str = "🧍‍♂️ *ФОП з працівниками*\n\
*Базовий тариф:* від 2300 грн/міс\n\
\n\
*У тариф входить:*\n\
✅ Усі послуги супроводу ФОП відповідної групи\n\
✅ Нарахування заробітної плати, ПДФО, військового збору та ЄСВ\n\
✅ Оформлення прийому, звільнення та відпусток працівників\n\
✅ Подання повідомлень про прийняття працівників\n\
✅ Підготовка та подання звіту з ЄСВ та ПДФО (Додаток 4ДФ)\n\
✅ Формування платіжних доручень по зарплаті та податках\n\
✅ Відповіді на кадрові запитання в процесі супроводу\n\
\n\
📌 *Вартість* залежить від кількості працівників";

const FOP_GENERAL_TEXT: &str = "📑 *ФОП на загальній системі оподаткування*\n\
*Базовий тариф:* від 3500 грн/міс\n\
\n\
*Особливості:*\n\
• ПДФО 18% та військовий збір з чистого доходу\n\
• Облік доходів і витрат\n\
• Без обмежень за видами діяльності та обсягом доходу\n\
\n\
*У тариф входить:*\n\
✅ Ведення Книги обліку доходів і витрат\n\
✅ Розрахунок авансових платежів з ПДФО та військового збору\n\
✅ Розрахунок та контроль сплати ЄСВ\n\
✅ Підготовка та подання річної декларації про майновий стан і доходи\n\
✅ Нагадування про сплату податків, формування реквізитів, контроль оплат\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Відповіді на запитання в процесі супроводу\n\
\n\
📌 *Реєстрація платником ПДВ* — вартість обговорюється окремо";

const LLC_TEXT: &str = "🏢 *ТОВ / ПП*\n\
*Базовий тариф:* від 5000 грн/міс\n\
\n\
*У тариф входить:*\n\
✅ Повне ведення бухгалтерського та податкового обліку\n\
✅ Обробка первинних документів, банківських виписок\n\
✅ Нарахування заробітної плати та кадровий облік\n\
✅ Підготовка та подання податкової та статистичної звітності\n\
✅ Підготовка та подання фінансової звітності\n\
✅ Формування платіжних доручень, контроль розрахунків з бюджетом\n\
✅ Щомісячний аудит електронного кабінету\n\
✅ Консультації з питань оподаткування та обліку\n\
\n\
📌 *Вартість* залежить від системи оподаткування, кількості операцій та працівників";

const REGISTER_FOP_TEXT: &str = "📝 *Реєстрація ФОП*\n\
*Вартість:* 1000 грн\n\
\n\
*У послугу входить:*\n\
✅ Консультація щодо вибору групи та системи оподаткування\n\
✅ Підбір КВЕДів під вашу діяльність\n\
✅ Підготовка та подання документів на реєстрацію\n\
✅ Подання заяви про обрання спрощеної системи оподаткування\n\
✅ Реєстрація в електронному кабінеті платника\n\
✅ Пам'ятка щодо сплати податків та подання звітності";

const CLOSE_FOP_TEXT: &str = "❌ *Закриття ФОП*\n\
*Вартість:* 1500 грн\n\
\n\
*У послугу входить:*\n\
✅ Перевірка стану розрахунків з бюджетом\n\
✅ Підготовка та подання заяви про припинення підприємницької діяльності\n\
✅ Підготовка та подання ліквідаційної звітності\n\
✅ Скасування реєстрації РРО/ПРРО (за наявності)\n\
✅ Контроль зняття з обліку в податковій\n\
\n\
📌 *Додатково:* за наявності найманих працівників вартість обговорюється окремо";

const DECLARATION_FOP_TEXT: &str = "📑 *Декларація ФОП на єдиному податку*\n\
*Вартість:* 1000 грн\n\
\n\
*У послугу входить:*\n\
✅ Аналіз доходів за звітний період\n\
✅ Перевірка даних електронного кабінету\n\
✅ Заповнення та подання декларації платника єдиного податку\n\
✅ Розрахунок сум податку та ЄСВ до сплати\n\
✅ Формування реквізитів для оплати";

const CONTACTS_TEXT: &str = "💼 *Наші контакти*\n\
\n\
📲 Instagram: [reliable_outsorsing_company](https://www.instagram.com/reliable_outsorsing_company/)\n\
✉️ Напишіть нам у Direct — відповімо та підберемо тариф саме для вас.";

const ABOUT_TEXT: &str = "👤 *Про компанію*\n\
\n\
*Reliable Outsorsing Company* – бухгалтерська аутсорсингова компанія.\n\
\n\
Ми беремо на себе облік, звітність та податки ФОП і компаній, щоб ви могли займатися своєю справою.";

fn nav(label: &'static str, target: MenuId) -> ButtonRef {
    ButtonRef::Navigate { label, target }
}

fn instagram() -> ButtonRef {
    ButtonRef::ExternalLink {
        label: "📲 Instagram",
        url: INSTAGRAM_URL,
    }
}

/// "Contacts" + "back to prices", shown under every tariff.
fn tariff_buttons() -> Vec<ButtonRef> {
    vec![
        nav("💼 Наші контакти", MenuId::Contacts),
        nav("🔙 Повернутися до попереднього меню", MenuId::Prices),
    ]
}

fn tariff(id: MenuId, body_text: &'static str) -> MenuNode {
    MenuNode {
        id,
        body_text,
        buttons: tariff_buttons(),
    }
}

pub(crate) fn nodes() -> Vec<MenuNode> {
    vec![
        MenuNode {
            id: MenuId::Main,
            body_text: MAIN_TEXT,
            buttons: vec![
                nav("📋 Ціни", MenuId::Prices),
                instagram(),
                nav("💼 Контакти", MenuId::Contacts),
                nav("👤 Про компанію", MenuId::About),
            ],
        },
        MenuNode {
            id: MenuId::Prices,
            body_text: PRICES_TEXT,
            buttons: vec![
                nav("1️⃣ ФОП 1 група — від 400 грн/міс", MenuId::Fop1),
                nav("2️⃣ ФОП 2 група — від 400 грн/міс", MenuId::Fop2),
                nav("3️⃣ ФОП 3 група (без ПДВ) — від 400 грн/міс", MenuId::Fop3NoVat),
                nav("3️⃣ ФОП 3 група (з ПДВ) — від 3500 грн/міс", MenuId::Fop3Vat),
                nav("🧍‍♂️ ФОП з працівниками — від 2300 грн/міс", MenuId::FopStaff),
                nav("📑 ФОП на загальній системі — від 3500 грн/міс", MenuId::FopGeneral),
                nav("🏢 ТОВ/ПП — від 5000 грн/міс", MenuId::Llc),
                nav("📝 Реєстрація ФОП — 1000 грн", MenuId::RegisterFop),
                nav("❌ Закриття ФОП — 1500 грн", MenuId::CloseFop),
                nav("📑 Декларація ФОП на ЄП — 1000 грн", MenuId::DeclarationFop),
                nav("🔙 Повернутися до головного меню", MenuId::Main),
            ],
        },
        tariff(MenuId::Fop1, FOP1_TEXT),
        tariff(MenuId::Fop2, FOP2_TEXT),
        tariff(MenuId::Fop3NoVat, FOP3_NO_VAT_TEXT),
        tariff(MenuId::Fop3Vat, FOP3_VAT_TEXT),
        tariff(MenuId::FopStaff, FOP_STAFF_TEXT),
        tariff(MenuId::FopGeneral, FOP_GENERAL_TEXT),
        tariff(MenuId::Llc, LLC_TEXT),
        tariff(MenuId::RegisterFop, REGISTER_FOP_TEXT),
        tariff(MenuId::CloseFop, CLOSE_FOP_TEXT),
        tariff(MenuId::DeclarationFop, DECLARATION_FOP_TEXT),
        MenuNode {
            id: MenuId::Contacts,
            body_text: CONTACTS_TEXT,
            buttons: vec![
                instagram(),
                nav("📋 Ціни", MenuId::Prices),
                nav("🔙 Повернутися до головного меню", MenuId::Main),
            ],
        },
        MenuNode {
            id: MenuId::About,
            body_text: ABOUT_TEXT,
            buttons: vec![
                nav("📋 Ціни", MenuId::Prices),
                nav("💼 Контакти", MenuId::Contacts),
                nav("🔙 Повернутися до головного меню", MenuId::Main),
            ],
        },
    ]
}
