//! Colored terminal rendering of descriptors and traces.
//!
//! Pure consumer of the core's output data; nothing here feeds back into
//! parsing or arithmetic.

use crate::models::{bin8, BoundaryDescriptor, ExplanationTrace, Ipv4, TraceStep};
use colored::Colorize;
use std::net::Ipv4Addr;

const LABEL_WIDTH: usize = 15;

/// Format a key as a left-aligned, colon-terminated label.
fn label(name: &str) -> String {
    format!("{:<width$}:", name, width = LABEL_WIDTH)
}

/// Render an optional address, `N/A` when absent.
fn opt_addr(addr: Option<Ipv4Addr>) -> String {
    match addr {
        Some(a) => a.to_string(),
        None => "N/A".to_string(),
    }
}

/// 1-based octet ordinal label, `1st` through `4th`.
fn ordinal_label(ordinal: usize) -> String {
    match ordinal {
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

/// Print the boundary summary block for one subnet.
pub fn print_summary(info: &BoundaryDescriptor, heading: &str) {
    println!(
        "\n{}",
        format!("========== {heading} ==========").blue().bold()
    );
    let rows = [
        ("Network", info.network.to_string(), false),
        ("CIDR", format!("/{}", info.prefix), false),
        ("Netmask", info.netmask.to_string(), false),
        ("First Host", opt_addr(info.first_host), true),
        ("Last Host", opt_addr(info.last_host), true),
        ("Broadcast", info.broadcast.to_string(), false),
        ("Next Subnet", opt_addr(info.next_subnet), false),
        ("Total Addresses", info.total_addresses.to_string(), false),
        ("Usable Hosts", info.usable_hosts.to_string(), true),
    ];
    for (key, value, is_host_row) in rows {
        let key = if is_host_row {
            label(key).green().bold()
        } else {
            label(key).cyan().bold()
        };
        println!("{key} {value}");
    }
}

/// Print the derivation narration for one subnet.
pub fn print_explanation(subnet: Ipv4, trace: &ExplanationTrace) {
    println!(
        "\n{}",
        "----- DETAILED EXPLANATION -----".magenta().bold()
    );
    println!("{} {}", label("Input IP").cyan().bold(), subnet.addr);
    println!(
        "{} {}/{}",
        label("Normalized CIDR").cyan().bold(),
        subnet.network(),
        subnet.mask
    );
    println!("{} {}", label("Netmask").cyan().bold(), subnet.netmask());
    println!();

    for step in trace.iter() {
        print_step(step);
    }
    println!("{}", "----- END EXPLANATION -----".magenta().bold());
}

fn print_step(step: &TraceStep) {
    match step {
        TraceStep::Base { bits } => {
            println!("{}", "                BASE".blue().bold());
            println!("{}\n", bits.cyan());
        }
        TraceStep::Netmask { bits, .. } => {
            println!("{}", "                SUBMASK".blue().bold());
            println!("{}\n", bits.cyan());
        }
        TraceStep::TransitionByte {
            index,
            bits_set,
            value,
            bits,
        } => {
            println!(
                "{} {index}",
                "Transition byte index (0-based):".green().bold()
            );
            println!(
                "{} {bits_set}",
                "Bits set in transition byte    :".green().bold()
            );
            println!("{} {bits}", "transition byte     ->".green().bold());
            println!(
                "{} {bits} = {value}\n",
                "the value of the byte ->".green().bold()
            );
        }
        TraceStep::NoTransitionByte => {
            println!(
                "{}\n",
                "No partial transition byte (prefix multiple of 8 or /0)."
                    .yellow()
                    .bold()
            );
        }
        TraceStep::OctetAnd {
            ordinal,
            addr_octet,
            mask_octet,
            network_octet,
        } => {
            if *ordinal == 1 {
                println!(
                    "{}",
                    "Step 1: Network Address (IP AND Netmask)".blue().bold()
                );
            }
            println!(
                "{} {addr_octet:3} ({})  AND  {mask_octet:3} ({})  =  {}",
                format!("{} byte:", ordinal_label(*ordinal)).cyan().bold(),
                bin8(*addr_octet),
                bin8(*mask_octet),
                format!("{network_octet:3} ({})", bin8(*network_octet)).green()
            );
        }
        TraceStep::NetworkAddress { network } => {
            println!(
                "\n{} {}\n",
                "Full network IP:".green().bold(),
                network.to_string().green()
            );
        }
        TraceStep::FirstHost { host } => {
            println!("{}", "Step 2: First Host".blue().bold());
            match host {
                Some(first) => println!(
                    "{} {}\n",
                    "- First host = network IP + 1 ->".cyan(),
                    first.to_string().green()
                ),
                None => println!(
                    "{}\n",
                    "- This subnet has no usable hosts by classical rules (/31 or /32).".yellow()
                ),
            }
        }
        TraceStep::LastHost {
            host,
            usable_hosts,
            total_addresses,
        } => {
            println!("{}", "Step 3: Last Host calculation".blue().bold());
            match host {
                Some(last) => {
                    println!(
                        "{} {}",
                        "- Last Host = broadcast - 1 ->".cyan(),
                        last.to_string().green()
                    );
                    println!(
                        "{} {total_addresses} - 2 = {}\n",
                        "- Usable hosts = Total addresses - 2 =".cyan(),
                        usable_hosts.to_string().green()
                    );
                }
                None => println!(
                    "{}\n",
                    "- No last host (no usable host addresses).".yellow()
                ),
            }
        }
        TraceStep::Broadcast {
            broadcast,
            last_host,
        } => {
            println!("{}", "Step 4: Broadcast Address".blue().bold());
            println!(
                "{} {}",
                "- Broadcast = all host bits set to 1 ->".cyan(),
                broadcast.to_string().green()
            );
            if let Some(last) = last_host {
                println!(
                    "{} {last} + 1 = {}",
                    "- Also: broadcast = last host + 1 ->".cyan(),
                    broadcast.to_string().green()
                );
            }
            println!();
        }
        TraceStep::NextSubnet {
            network,
            block_size,
            next,
        } => {
            println!("{}", "Step 5: Next Subnet".blue().bold());
            println!(
                "{}",
                "- Next subnet starts at network_address + block size".cyan()
            );
            println!("  {}", format!("= {network} + {block_size}").cyan());
            match next {
                Some(next) => println!("  = {}", next.to_string().green()),
                None => println!(
                    "  {}",
                    "= past the top of the IPv4 address space (no next subnet)".yellow()
                ),
            }
        }
    }
}
