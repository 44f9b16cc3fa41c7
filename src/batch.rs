use futures::StreamExt;
use log::info;
use crate::client::AddressClient;
use crate::error::Result;
use crate::model::{AddressFilter, AddressResult};

pub const DEFAULT_CONCURRENCY: usize = 10;

/// A filter together with what the service made of it
#[derive(Debug)]
pub struct Lookup {
    pub filter: AddressFilter,
    pub outcome: Result<AddressResult>,
}

impl Lookup {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Look up every filter, keeping at most `concurrency` requests in flight.
///
/// One failed lookup does not stop the others; results come back in input order.
pub async fn lookup_all(client: &AddressClient, filters: Vec<AddressFilter>, concurrency: usize) -> Vec<Lookup> {
    let total = filters.len();
    let mut lookups = futures::stream::iter(filters).enumerate().map(|(idx, filter)| {
        async move {
            info!("[{}/{total}] looking up [{}]", idx + 1, describe(&filter));
            let outcome = client.get_addresses(&filter).await;
            (idx, Lookup { filter, outcome })
        }
    })
        .buffer_unordered(concurrency.max(1))
        .collect::<Vec<_>>()
        .await;

    lookups.sort_by_key(|(idx, _)| *idx);
    lookups.into_iter().map(|(_, lookup)| lookup).collect()
}

fn describe(filter: &AddressFilter) -> String {
    [&filter.line1, &filter.city, &filter.state_code, &filter.zip_code_leading5]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}
