//! # Notifier ライブラリ
//!
//! アカウント作成イベントを受け取り、講師プロフィールの作成をバックエンドに
//! 依頼するサービスのコアモジュール。テスト用に内部モジュールを公開する。
//!
//! ## モジュール構成
//!
//! - `app_builder`: DI とルーター構築
//! - `config`: 環境変数からの設定読み込み
//! - `handler`: HTTP ハンドラ
//! - `usecase`: イベント処理本体（`UserCreatedNotifier`）

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
