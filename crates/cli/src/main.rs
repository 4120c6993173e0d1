use anyhow::bail;

use kwitansi_core::RawAmount;
use kwitansi_receipts::amount_lines;

fn main() -> anyhow::Result<()> {
    kwitansi_observability::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        bail!("usage: kwitansi <amount> [<amount> ...]");
    }

    for arg in args {
        let raw = RawAmount::from(arg.as_str());
        let lines = amount_lines(Some(&raw));
        println!("{}\t{}", lines.numeric, lines.spelled);
    }

    Ok(())
}
