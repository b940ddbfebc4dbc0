//! Static menu tree: node ids, buttons and the content registry.

use std::{fmt, str::FromStr};

mod content;
pub mod registry;

pub use registry::MenuRegistry;

/// Every screen the bot can show. The string form is the callback identifier
/// embedded in inline buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuId {
    Main,
    Prices,
    Fop1,
    Fop2,
    Fop3NoVat,
    Fop3Vat,
    FopStaff,
    FopGeneral,
    Llc,
    RegisterFop,
    CloseFop,
    DeclarationFop,
    Contacts,
    About,
}

impl MenuId {
    pub const ALL: [MenuId; 14] = [
        MenuId::Main,
        MenuId::Prices,
        MenuId::Fop1,
        MenuId::Fop2,
        MenuId::Fop3NoVat,
        MenuId::Fop3Vat,
        MenuId::FopStaff,
        MenuId::FopGeneral,
        MenuId::Llc,
        MenuId::RegisterFop,
        MenuId::CloseFop,
        MenuId::DeclarationFop,
        MenuId::Contacts,
        MenuId::About,
    ];

    /// Tariff detail screens, in price-list order.
    pub const TARIFFS: [MenuId; 10] = [
        MenuId::Fop1,
        MenuId::Fop2,
        MenuId::Fop3NoVat,
        MenuId::Fop3Vat,
        MenuId::FopStaff,
        MenuId::FopGeneral,
        MenuId::Llc,
        MenuId::RegisterFop,
        MenuId::CloseFop,
        MenuId::DeclarationFop,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MenuId::Main => "main_menu",
            MenuId::Prices => "prices",
            MenuId::Fop1 => "fop1",
            MenuId::Fop2 => "fop2",
            MenuId::Fop3NoVat => "fop3nopdv",
            MenuId::Fop3Vat => "fop3pdv",
            MenuId::FopStaff => "fop_staff",
            MenuId::FopGeneral => "fop_general",
            MenuId::Llc => "llc",
            MenuId::RegisterFop => "reg_fop",
            MenuId::CloseFop => "close_fop",
            MenuId::DeclarationFop => "decl_fop",
            MenuId::Contacts => "contacts",
            MenuId::About => "about",
        }
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMenuId(pub String);

impl fmt::Display for UnknownMenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown menu id `{}`", self.0)
    }
}

impl std::error::Error for UnknownMenuId {}

impl FromStr for MenuId {
    type Err = UnknownMenuId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownMenuId(s.to_string()))
    }
}

/// One inline button under a menu screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonRef {
    /// Round-trips to the bot as a callback carrying `target.as_str()`.
    Navigate { label: &'static str, target: MenuId },
    /// Opened by the client; the bot never hears about it.
    ExternalLink {
        label: &'static str,
        url: &'static str,
    },
}

impl ButtonRef {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonRef::Navigate { label, .. } | ButtonRef::ExternalLink { label, .. } => *label,
        }
    }

    pub fn target(&self) -> Option<MenuId> {
        match self {
            ButtonRef::Navigate { target, .. } => Some(*target),
            ButtonRef::ExternalLink { .. } => None,
        }
    }
}

/// One screen of text + buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuNode {
    pub id: MenuId,
    /// Written in the `formatting` markup subset.
    pub body_text: &'static str,
    /// Display order, one button per row.
    pub buttons: Vec<ButtonRef>,
}

impl MenuNode {
    pub fn navigates_to(&self, target: MenuId) -> bool {
        self.buttons.iter().any(|b| b.target() == Some(target))
    }
}
