use std::collections::HashMap;

use url::Url;

use crate::{errors::Error, Result};

use super::{content, ButtonRef, MenuId, MenuNode};

/// Immutable id → screen table, built once at startup and shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct MenuRegistry {
    nodes: HashMap<MenuId, MenuNode>,
}

impl MenuRegistry {
    /// Build a registry from an explicit node list.
    ///
    /// Rejects duplicate ids, dangling `Navigate` targets and malformed link URLs,
    /// so a broken table fails at startup instead of on a user's tap.
    pub fn new(nodes: Vec<MenuNode>) -> Result<Self> {
        let mut map = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let id = node.id;
            if map.insert(id, node).is_some() {
                return Err(Error::Config(format!("duplicate menu node `{id}`")));
            }
        }

        for node in map.values() {
            if node.body_text.trim().is_empty() {
                return Err(Error::Config(format!("menu node `{}` has no text", node.id)));
            }
            for button in &node.buttons {
                match button {
                    ButtonRef::Navigate { target, .. } if !map.contains_key(target) => {
                        return Err(Error::Config(format!(
                            "menu node `{}` links to missing node `{target}`",
                            node.id
                        )));
                    }
                    ButtonRef::ExternalLink { url, .. } => {
                        Url::parse(url).map_err(|e| {
                            Error::Config(format!(
                                "menu node `{}` has a bad link `{url}`: {e}",
                                node.id
                            ))
                        })?;
                    }
                    ButtonRef::Navigate { .. } => {}
                }
            }
        }

        Ok(Self { nodes: map })
    }

    /// The business's price list and company pages.
    pub fn builtin() -> Result<Self> {
        let registry = Self::new(content::nodes())?;
        if let Some(missing) = MenuId::ALL.into_iter().find(|id| registry.get(*id).is_none()) {
            return Err(Error::Config(format!("menu node `{missing}` is not defined")));
        }
        Ok(registry)
    }

    pub fn get(&self, id: MenuId) -> Option<&MenuNode> {
        self.nodes.get(&id)
    }

    /// Resolve a raw callback identifier. `None` means not found.
    pub fn lookup(&self, id: &str) -> Option<&MenuNode> {
        id.parse::<MenuId>().ok().and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> MenuRegistry {
        MenuRegistry::builtin().unwrap()
    }

    #[test]
    fn builtin_covers_every_id() {
        let r = builtin();
        assert_eq!(r.len(), MenuId::ALL.len());
        for id in MenuId::ALL {
            assert_eq!(r.get(id).map(|n| n.id), Some(id));
        }
    }

    #[test]
    fn every_leaf_offers_a_way_back() {
        let r = builtin();
        for id in MenuId::ALL.into_iter().filter(|id| *id != MenuId::Main) {
            let node = r.lookup(id.as_str()).unwrap();
            assert!(!node.body_text.trim().is_empty(), "{id} has blank text");
            if id == MenuId::Prices {
                // The price list itself returns to the root.
                assert!(node.navigates_to(MenuId::Main));
            } else {
                assert!(
                    node.navigates_to(MenuId::Contacts) || node.navigates_to(MenuId::Prices),
                    "{id} has no back-navigation"
                );
            }
        }
    }

    #[test]
    fn root_has_four_buttons_in_order() {
        let root = builtin().get(MenuId::Main).cloned().unwrap();
        let labels: Vec<_> = root.buttons.iter().map(|b| b.label()).collect();
        assert_eq!(
            labels,
            ["📋 Ціни", "📲 Instagram", "💼 Контакти", "👤 Про компанію"]
        );
        assert_eq!(
            root.buttons[1],
            ButtonRef::ExternalLink {
                label: "📲 Instagram",
                url: "https://www.instagram.com/reliable_outsorsing_company/",
            }
        );
    }

    #[test]
    fn prices_lists_every_tariff_then_back_to_root() {
        let r = builtin();
        let prices = r.get(MenuId::Prices).unwrap();
        assert_eq!(prices.buttons.len(), 11);
        let targets: Vec<_> = prices.buttons.iter().filter_map(|b| b.target()).collect();
        assert_eq!(&targets[..10], &MenuId::TARIFFS[..]);
        assert_eq!(targets[10], MenuId::Main);
    }

    #[test]
    fn tariffs_have_contacts_and_back_to_prices() {
        let r = builtin();
        for id in MenuId::TARIFFS {
            let targets: Vec<_> = r.get(id).unwrap().buttons.iter().map(|b| b.target()).collect();
            assert_eq!(targets, [Some(MenuId::Contacts), Some(MenuId::Prices)], "{id}");
        }
        assert!(r.get(MenuId::Fop1).unwrap().body_text.contains("400 грн/міс"));
    }

    #[test]
    fn contacts_point_only_at_instagram() {
        let contacts = builtin().get(MenuId::Contacts).cloned().unwrap();
        assert!(contacts.body_text.contains("instagram.com/reliable_outsorsing_company"));
        assert!(!contacts.body_text.contains("Графік"));
        let links: Vec<_> = contacts
            .buttons
            .iter()
            .filter(|b| matches!(b, ButtonRef::ExternalLink { .. }))
            .collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label(), "📲 Instagram");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let r = builtin();
        assert!(r.lookup("xyz123").is_none());
        assert!(r.lookup("start").is_none());
        assert!(r.lookup("").is_none());
    }

    #[test]
    fn rejects_dangling_targets_and_duplicates() {
        let dangling = MenuNode {
            id: MenuId::Main,
            body_text: "hi",
            buttons: vec![ButtonRef::Navigate {
                label: "x",
                target: MenuId::About,
            }],
        };
        assert!(matches!(
            MenuRegistry::new(vec![dangling.clone()]),
            Err(Error::Config(_))
        ));

        let leaf = MenuNode {
            id: MenuId::About,
            body_text: "about",
            buttons: vec![],
        };
        assert!(MenuRegistry::new(vec![dangling.clone(), leaf.clone()]).is_ok());
        assert!(MenuRegistry::new(vec![dangling, leaf.clone(), leaf]).is_err());
    }

    #[test]
    fn rejects_bad_links_and_blank_text() {
        let bad_link = MenuNode {
            id: MenuId::Main,
            body_text: "hi",
            buttons: vec![ButtonRef::ExternalLink {
                label: "x",
                url: "not a url",
            }],
        };
        assert!(MenuRegistry::new(vec![bad_link]).is_err());

        let blank = MenuNode {
            id: MenuId::Main,
            body_text: "  ",
            buttons: vec![],
        };
        assert!(MenuRegistry::new(vec![blank]).is_err());
    }
}
