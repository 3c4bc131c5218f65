use eframe::egui::{ScrollArea, Ui};
use tracing::warn;

use iris_chain::{
    format_currency_amount, get_explorer_link, get_swap_tx, time_in_minutes, ExplorerDataType,
    Route, SwapTx,
};
use iris_shared_types::WidgetConfig;

use super::{
    misc::{button, rich_text},
    GUI,
};
use crate::theme::IrisTheme;

/// Decimals shown for route amounts
const DISPLAY_DECIMALS: u32 = 4;

/// Readable amount, falls back to the raw value if it cannot be formatted
fn readable(amount: &str, decimals: u8) -> String {
    match format_currency_amount(amount, decimals, Some(DISPLAY_DECIMALS)) {
        Ok(amount) => amount,
        Err(e) => {
            warn!("Could not format amount {}: {}", amount, e);
            amount.to_string()
        }
    }
}

/// One line summary of the swap part of a route, eg. `Swap via 1inch`
pub fn swap_summary(route: &Route, current_tx: Option<u32>) -> Option<String> {
    let protocol = match get_swap_tx(route, current_tx)? {
        SwapTx::Middleware(step) => step.protocol.as_ref(),
        SwapTx::Dex(tx) => tx.protocol.as_ref(),
    };

    let name = protocol
        .map(|p| p.display_name.clone().unwrap_or_else(|| p.name.clone()))
        .unwrap_or_else(|| "unknown".to_string());

    Some(format!("Swap via {}", name))
}

impl GUI {
    /// Render the routes of the last quote
    pub fn routes_ui(&mut self, ui: &mut Ui, config: &WidgetConfig, theme: &IrisTheme) {
        if self.routes.is_empty() {
            return;
        }

        let to_decimals = self.dest_token.as_ref().map(|token| token.decimals).unwrap_or(18);

        ui.add_space(10.0);
        ui.label(rich_text("Routes", 18.0));

        ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
            for (index, route) in self.routes.iter().enumerate() {
                let selected = index == self.selected_route;
                let frame = if selected { theme.prompt_frame } else { theme.default_panel_frame };

                frame.show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let bridges = route.used_bridge_names.join(", ");
                        ui.label(rich_text(&bridges, 14.0).color(theme.colors.accent));
                        ui.label(rich_text(&readable(&route.to_amount, to_decimals), 14.0));
                        ui.label(rich_text(&time_in_minutes(route.service_time), 13.0).color(theme.colors.lighter_gray));

                        if !selected && ui.add(button(rich_text("Select", 13.0))).clicked() {
                            self.selected_route = index;
                            self.current_tx = route.user_txs.first().map(|tx| tx.user_tx_index);
                        }
                    });
                });
            }
        });

        let Some(route) = self.routes.get(self.selected_route) else {
            return;
        };

        ui.add_space(10.0);
        if let Some(summary) = swap_summary(route, self.current_tx) {
            ui.label(rich_text(&summary, 13.0));
        }

        for (text, link) in step_links(route, config, &self.user_address) {
            ui.hyperlink_to(text, link);
        }
    }
}

/// Explorer link of every step whose chain has an explorer
///
/// No hash exists before the user signs, so steps link to the wallet address.
/// Without an address there are no links
pub fn step_links(route: &Route, config: &WidgetConfig, user_address: &str) -> Vec<(String, String)> {
    let address = user_address.trim();
    if address.is_empty() {
        return Vec::new();
    }

    route
        .user_txs
        .iter()
        .filter_map(|tx| {
            let chain = config.chain(tx.chain_id?)?;
            let explorer = chain.explorer()?;
            Some((
                format!("Step {} on {}", tx.user_tx_index + 1, chain.name),
                get_explorer_link(explorer, address, ExplorerDataType::Address),
            ))
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use iris_chain::{serde_json, Chain, NativeCurrency};

    fn route() -> Route {
        serde_json::from_str(
            r#"{
                "routeId": "r-1",
                "toAmount": "99500000",
                "usedBridgeNames": ["hop"],
                "serviceTime": 420,
                "userTxs": [
                    {
                        "userTxType": "fund-movr",
                        "chainId": 137,
                        "userTxIndex": 0,
                        "steps": [
                            { "type": "middleware", "protocol": { "name": "oneinch", "displayName": "1inch" } },
                            { "type": "bridge", "protocol": { "name": "hop" } }
                        ]
                    },
                    { "userTxType": "dex-swap", "chainId": 10, "userTxIndex": 1, "protocol": { "name": "zerox" } }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn summary_follows_the_current_transaction() {
        let route = route();
        assert_eq!(swap_summary(&route, Some(0)).as_deref(), Some("Swap via 1inch"));
        assert_eq!(swap_summary(&route, Some(1)).as_deref(), Some("Swap via zerox"));
        assert_eq!(swap_summary(&route, Some(2)), None);
        assert_eq!(swap_summary(&route, None), None);
    }

    #[test]
    fn unformattable_amount_is_shown_raw() {
        assert_eq!(readable("99500000", 6), "99.5");
        assert_eq!(readable("not a number", 6), "not a number");
    }

    #[test]
    fn steps_link_to_the_wallet_address() {
        let config = WidgetConfig {
            chains: vec![
                Chain::new(137, "Polygon", NativeCurrency::default())
                    .with_explorers(vec!["https://polygonscan.com".to_string()]),
                Chain::new(10, "Optimism", NativeCurrency::default()),
            ],
            ..WidgetConfig::default()
        };

        let links = step_links(&route(), &config, " 0xabc ");
        assert_eq!(
            links,
            vec![("Step 1 on Polygon".to_string(), "https://polygonscan.com/address/0xabc".to_string())]
        );
    }

    #[test]
    fn no_links_without_an_address() {
        let config = WidgetConfig {
            chains: vec![Chain::new(137, "Polygon", NativeCurrency::default())
                .with_explorers(vec!["https://polygonscan.com".to_string()])],
            ..WidgetConfig::default()
        };

        assert!(step_links(&route(), &config, "").is_empty());
        assert!(step_links(&route(), &config, "   ").is_empty());
    }
}
