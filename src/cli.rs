use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "attendance-remarks")]
#[command(about = "考勤结果备注汇总工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 不输出处理日志
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 汇总考勤表并生成结果表
    Process {
        /// 输入Excel文件
        #[arg(required = true)]
        input: PathBuf,

        /// 输出文件（默认: 输入文件同目录下的 考勤结果统计_<文件名>.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 考勤月份（覆盖设置）
        #[arg(short, long)]
        month: Option<String>,

        /// 第一行表头的行号（从 0 开始，覆盖设置）
        #[arg(long)]
        header_row: Option<usize>,

        /// 以JSON输出每人的汇总结果
        #[arg(long)]
        json: bool,
    },

    /// 解析单个考勤文本并显示备注
    Parse {
        /// 考勤结果文本
        #[arg(required = true)]
        text: String,
    },

    /// 显示/修改设置
    Config {
        /// 设置考勤月份
        #[arg(long)]
        set_month: Option<String>,

        /// 设置组织单元名称
        #[arg(long)]
        set_organization: Option<String>,

        /// 设置职位名称
        #[arg(long)]
        set_position: Option<String>,

        /// 显示设置
        #[arg(long)]
        show: bool,
    },
}
