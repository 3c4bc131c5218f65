use iris_chain::Chain;


/// Network restrictions and defaults given by the host of the widget
///
/// Always a copy of the latest [crate::WidgetProps], never merged with older values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomSettings {
    /// Chain ids allowed as source, `None` allows every chain
    pub source_networks: Option<Vec<u64>>,

    /// Chain ids allowed as destination, `None` allows every chain
    pub dest_networks: Option<Vec<u64>>,

    pub default_source_network: Option<u64>,

    pub default_dest_network: Option<u64>,
}

impl CustomSettings {
    /// The chains that can be picked as source
    pub fn source_chains<'a>(&self, chains: &'a [Chain]) -> Vec<&'a Chain> {
        allowed(chains, self.source_networks.as_deref())
    }

    /// The chains that can be picked as destination
    pub fn dest_chains<'a>(&self, chains: &'a [Chain]) -> Vec<&'a Chain> {
        allowed(chains, self.dest_networks.as_deref())
    }

    /// The default source chain, falls back to the first allowed chain
    pub fn default_source<'a>(&self, chains: &'a [Chain]) -> Option<&'a Chain> {
        pick_default(self.source_chains(chains), self.default_source_network)
    }

    /// The default destination chain, falls back to the first allowed chain
    /// that is not the default source
    pub fn default_dest<'a>(&self, chains: &'a [Chain]) -> Option<&'a Chain> {
        let source = self.default_source(chains).map(|chain| chain.chain_id);
        let allowed = self.dest_chains(chains);

        if let Some(id) = self.default_dest_network {
            if let Some(chain) = allowed.iter().find(|chain| chain.chain_id == id) {
                return Some(*chain);
            }
        }

        allowed
            .iter()
            .find(|chain| Some(chain.chain_id) != source)
            .or(allowed.first())
            .copied()
    }
}

fn allowed<'a>(chains: &'a [Chain], ids: Option<&[u64]>) -> Vec<&'a Chain> {
    match ids {
        Some(ids) => chains.iter().filter(|chain| ids.contains(&chain.chain_id)).collect(),
        None => chains.iter().collect(),
    }
}

fn pick_default(allowed: Vec<&Chain>, id: Option<u64>) -> Option<&Chain> {
    id.and_then(|id| allowed.iter().find(|chain| chain.chain_id == id).copied())
        .or(allowed.first().copied())
}
