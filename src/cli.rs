use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aquasense")]
#[command(about = "植物カタログ・水やり推定ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データ保存先（設定より優先）
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 植物を検索して追加
    Add {
        /// 植物名
        #[arg(required = true)]
        name: String,

        /// 鉢植え（水量 ×0.8）
        #[arg(long, conflicts_with = "ground")]
        pot: bool,

        /// 地植え
        #[arg(long)]
        ground: bool,
    },

    /// 登録済みの植物を表示
    List {
        /// カテゴリで絞り込み (vegetable/fruit/flower/grass/ornamental/herb/general)
        #[arg(short, long)]
        category: Option<String>,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 植物を削除
    Remove {
        /// 植物ID
        #[arg(required = true)]
        id: String,

        /// 確認しない
        #[arg(short, long)]
        yes: bool,
    },

    /// 自動水やりの対象を設定
    Select {
        /// 植物名（表示名）
        #[arg(required = true)]
        name: String,
    },

    /// 自動水やりを停止
    Stop,

    /// 土壌水分からアドバイス
    Advise {
        /// 土壌水分(%)
        #[arg(required = true)]
        soil: f64,

        /// 気温(°C)
        #[arg(long)]
        temp: Option<f64>,
    },

    /// 組み込み候補を検索
    Suggest {
        /// 植物名（省略時は一覧）
        name: Option<String>,
    },

    /// 検索履歴を表示
    History,

    /// キャッシュ管理
    Cache {
        /// キャッシュを削除
        #[arg(long)]
        clear: bool,

        /// キャッシュ情報を表示
        #[arg(long)]
        info: bool,
    },

    /// 設定を表示/編集
    Config {
        /// Perenual APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
