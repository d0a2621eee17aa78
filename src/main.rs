use attendance_remarks::{cli, config, error, processor};
use attendance_remarks_common::{aggregate, format_record, ProgressLog};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Process { input, output, month, header_row, json } => {
            println!("📋 attendance-remarks - 考勤汇总\n");

            let config = config.with_overrides(month, header_row);

            let output = output
                .unwrap_or_else(|| processor::default_output_path(&input, &config.output_prefix));

            let mut log = if cli.quiet {
                ProgressLog::silent()
            } else {
                ProgressLog::new(|line: &str| println!("{}", line))
            };

            match processor::run(&input, &output, &config, &mut log) {
                Ok(report) => {
                    if json {
                        println!("{}", processor::summaries_json(&report.summaries)?);
                    }
                    println!("\n✔ 输出人数: {}", report.summaries.len());
                    println!("✔ 结果文件: {}", output.display());
                    println!("\n✅ {}", processor::SUCCESS_MESSAGE);
                }
                Err(e) => {
                    eprintln!("\n❌ {}", processor::failure_message(&e));
                    return Err(e);
                }
            }
        }

        Commands::Parse { text } => {
            let map = aggregate(&text);

            if map.is_empty() {
                println!("（无匹配）");
            } else {
                println!("{}", format_record(&map));
                if !cli.quiet {
                    println!("  日期数: {}", map.len());
                    println!("  合计: {}小时", attendance_remarks_common::format_hours(map.total_hours()));
                }
            }
        }

        Commands::Config { set_month, set_organization, set_position, show } => {
            let mut config = config;
            let changed = config.update(set_month, set_organization, set_position);
            if changed {
                config.save()?;
                println!("✔ 设置已保存");
            }

            if show || !changed {
                println!("设置:");
                println!("  考勤月份: {}", config.attendance_month);
                println!("  组织单元名称: {}", config.organization);
                println!("  职位名称: {}", config.position);
                println!("  职员代码: {}", config.employee_code);
                println!("  表头行: {}", config.header_row);
                println!("  输出前缀: {}", config.output_prefix);
            }
        }
    }

    Ok(())
}
