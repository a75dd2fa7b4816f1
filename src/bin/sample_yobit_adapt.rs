use eyre::{bail, Result};
use yobit_adapters::global::config::CONFIG;
use yobit_adapters::model::meta::ExchangeMetaData;
use yobit_adapters::translator::traits::{ToTicker, ToTrades};
use yobit_adapters::translator::yobit;
use yobit_adapters::yobit::marketdata::{YoBitInfo, YoBitOrderBooks, YoBitTickers, YoBitTrades};

/// Converts a saved YoBit response and prints the internal model as JSON.
/// usage: sample_yobit_adapt <depth|ticker|trades|info> <file.json>
fn main() -> Result<()> {
    yobit_adapters::logger::log_init()?;
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("usage: {} <depth|ticker|trades|info> <file.json>", args[0]);
    }
    let (kind, path) = (args[1].as_str(), args[2].as_str());
    let body = std::fs::read_to_string(path)?;
    log::info!("read {} bytes from {path}", body.len());

    match kind {
        "depth" => {
            let books: YoBitOrderBooks = serde_json::from_str(&body)?;
            for (pair, book) in books.iter() {
                let currency_pair = yobit::adapt_currency_pair(pair)?;
                let book = yobit::adapt_order_book_with_config(book, &currency_pair, &CONFIG);
                log::info!(
                    "{currency_pair}: {} asks, {} bids",
                    book.asks.len(),
                    book.bids.len()
                );
                println!("{}", serde_json::to_string_pretty(&book)?);
            }
        }
        "ticker" => {
            let tickers: YoBitTickers = serde_json::from_str(&body)?;
            for (pair, ticker) in tickers.iter() {
                let currency_pair = yobit::adapt_currency_pair(pair)?;
                println!("{}", serde_json::to_string_pretty(&ticker.to_internal(&currency_pair)?)?);
            }
        }
        "trades" => {
            let trades: YoBitTrades = serde_json::from_str(&body)?;
            for (pair, records) in trades.iter() {
                let currency_pair = yobit::adapt_currency_pair(pair)?;
                let trades = records.to_internal(&currency_pair)?;
                log::info!(
                    "{currency_pair}: {} trades, cursor {:?}",
                    trades.trades.len(),
                    trades.last_id
                );
                println!("{}", serde_json::to_string_pretty(&trades)?);
            }
        }
        "info" => {
            let info: YoBitInfo = serde_json::from_str(&body)?;
            let mut meta = ExchangeMetaData::default();
            yobit::merge_exchange_meta_data_with_config(&mut meta, &info, &CONFIG)?;
            log::info!(
                "{} pairs, {} currencies, url token: {}",
                meta.currency_pairs.len(),
                meta.currencies.len(),
                yobit::adapt_ccy_pairs_to_url_format(meta.currency_pairs.keys())
            );
            println!("{}", serde_json::to_string_pretty(&meta)?);
        }
        other => bail!("unknown response kind {other:?}"),
    }
    Ok(())
}
