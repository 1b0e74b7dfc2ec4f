use ::crossterm::style::Color::*;
use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use itemconv::{
    common::{FormatVersion, ItemCode},
    convert_held_item, legacy_remap_g1_to_g2, Generation, HeldItemTransfer, ItemTable,
    NO_EQUIVALENT,
};
use itertools::Itertools;
use structopt::clap::arg_enum;
use structopt::StructOpt;
use termimad::{rgb, Alignment, MadSkin};

arg_enum! {
    #[derive(Debug)]
    enum Format {
        Text,
        Json,
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::Text
    }
}

#[derive(Debug, StructOpt)]
struct ConvertOpt {
    /// Held item code, decimal or hex (`0xAE`, `$AE`)
    item: ItemCode,

    /// Format the item comes from (`2`, `g3`, `gen4`, ...)
    #[structopt(long)]
    from: FormatVersion,

    /// Format the item goes to
    #[structopt(long)]
    to: FormatVersion,

    #[structopt(long, default_value = "text")]
    format: Format,
}

#[derive(Debug, StructOpt)]
struct RemapOpt {
    /// Generation 1 held item code
    item: ItemCode,
}

#[derive(Debug, StructOpt)]
struct LookupOpt {
    /// Generation whose table to use (`gen2` or `gen3`)
    generation: Generation,

    code: ItemCode,

    /// Look up a canonical code instead of a native one
    #[structopt(long)]
    inverse: bool,
}

#[derive(Debug, StructOpt)]
struct DumpOpt {
    generation: Generation,

    #[structopt(long, default_value = "text")]
    format: Format,
}

#[derive(Debug, StructOpt)]
enum Opt {
    Convert(ConvertOpt),
    Dump(DumpOpt),
    Lookup(LookupOpt),
    Remap(RemapOpt),
}

fn mad_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(rgb(255, 187, 0));
    skin.bold.set_fg(Yellow);
    skin.italic.set_fgbg(Magenta, rgb(30, 30, 40));
    skin.table.align = Alignment::Center;

    skin
}

fn item_table(generation: Generation) -> Result<&'static ItemTable> {
    generation
        .table()
        .ok_or_else(|| anyhow!("{generation} has no item table"))
}

fn format_canonical(canonical: u16) -> String {
    if canonical == NO_EQUIVALENT {
        "*none*".to_string()
    } else {
        canonical.to_string()
    }
}

fn transfer_json(transfer: &HeldItemTransfer, result: i32) -> Result<String> {
    let output = serde_json::json!({ "transfer": transfer, "result": result });
    Ok(serde_json::to_string_pretty(&output)?)
}

fn cmd_convert(opt: &ConvertOpt) -> Result<()> {
    let item = i32::try_from(opt.item.value())
        .map_err(|_| anyhow!("item code {} is out of range", opt.item))?;
    let result = convert_held_item(item, opt.from.value(), opt.to.value());

    match opt.format {
        Format::Text => println!("{} {item} -> {} {result}", opt.from, opt.to),
        Format::Json => {
            let transfer = HeldItemTransfer::new(item, opt.from.value(), opt.to.value());
            println!("{}", transfer_json(&transfer, result)?);
        }
    }
    Ok(())
}

fn cmd_remap(opt: &RemapOpt) -> Result<()> {
    let item = u8::try_from(opt.item.value())
        .map_err(|_| anyhow!("generation 1 item codes are a single byte, got {}", opt.item))?;
    let remapped = legacy_remap_g1_to_g2(item);
    println!("{item:#04x} -> {remapped:#04x}");
    Ok(())
}

fn cmd_lookup(opt: &LookupOpt) -> Result<()> {
    let table = item_table(opt.generation)?;
    let code = u16::try_from(opt.code.value())
        .map_err(|_| anyhow!("item code {} is out of range", opt.code))?;

    if opt.inverse {
        println!("canonical {code} -> {} {}", opt.generation, table.native(code));
    } else {
        let canonical = table.canonical(code);
        if canonical == NO_EQUIVALENT {
            println!("{} {code} has no canonical equivalent", opt.generation);
        } else {
            println!("{} {code} -> canonical {canonical}", opt.generation);
        }
    }
    Ok(())
}

fn cmd_dump(opt: &DumpOpt) -> Result<()> {
    let table = item_table(opt.generation)?;

    match opt.format {
        Format::Text => {
            let mut text = format!("# {} items\n", opt.generation);
            text.push_str("|:-:|:-:|:-:|\n");
            text.push_str(&format!("|**{}**|**Hex**|**Canonical**|\n", opt.generation));
            text.push_str("|-:|-:|-:|\n");
            text.push_str(
                &table
                    .entries()
                    .map(|(native, canonical)| {
                        format!("|{native} |{native:#04x} |{} |", format_canonical(canonical))
                    })
                    .join("\n"),
            );
            text.push_str("\n|-\n");
            println!("{}", mad_skin().term_text(&text));
        }
        Format::Json => {
            let entries: IndexMap<u16, u16> = table.entries().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();

    match opt {
        Opt::Convert(o) => cmd_convert(&o)?,
        Opt::Dump(o) => cmd_dump(&o)?,
        Opt::Lookup(o) => cmd_lookup(&o)?,
        Opt::Remap(o) => cmd_remap(&o)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_args_parse() {
        let opt = Opt::from_iter(["itemconv-util", "convert", "0xD5", "--from", "g2", "--to", "gen4"]);
        match opt {
            Opt::Convert(o) => {
                assert_eq!(o.item, ItemCode(213));
                assert_eq!(o.from, FormatVersion(2));
                assert_eq!(o.to, FormatVersion(4));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn lookup_args_parse() {
        let opt = Opt::from_iter(["itemconv-util", "lookup", "gen3", "349", "--inverse"]);
        match opt {
            Opt::Lookup(o) => {
                assert_eq!(o.generation, Generation::Gen3);
                assert_eq!(o.code, ItemCode(349));
                assert!(o.inverse);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn bad_generation_is_rejected() {
        assert!(Opt::from_iter_safe(["itemconv-util", "dump", "gen9"]).is_err());
    }

    #[test]
    fn tableless_generations_error() {
        assert!(item_table(Generation::Gen1).is_err());
        assert!(item_table(Generation::Gen4).is_err());
        assert_eq!(item_table(Generation::Gen2).unwrap().len(), 256);
    }

    #[test]
    fn transfer_json_carries_record_and_result() {
        let transfer = HeldItemTransfer::new(213, 2, 4);
        let json = transfer_json(&transfer, transfer.convert()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["transfer"]["item"], 213);
        assert_eq!(value["transfer"]["source"], 2);
        assert_eq!(value["transfer"]["destination"], 4);
        assert_eq!(value["result"], 349);
    }

    #[test]
    fn sentinel_formats_as_none() {
        assert_eq!(format_canonical(NO_EQUIVALENT), "*none*");
        assert_eq!(format_canonical(349), "349");
    }
}
