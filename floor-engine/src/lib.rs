//! Floor engine - reservation and table-assignment core for host-club stores
//!
//! # 模块结构
//!
//! ```text
//! floor-engine/src/
//! ├── core/          # 配置
//! ├── floor/         # 预约 / 桌台事件溯源状态机与视图
//! ├── tenant.rs      # 子域名 → 店铺
//! └── utils/         # 日志、时间、校验
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = Config::load()?;
//! init_logger_from_config(&config);
//! let floor = FloorManager::from_config(&config);
//! let session = Session::from_identity(&identity)?;
//!
//! floor.add_table_setting(&session, "T1")?;
//! floor.add_reservation(&session, Reservation::new(reservation_id(), "Airi", "T1", 5000))?;
//! let cards = floor.visible_tables(TableFilter::All, &first_visit_labels);
//! ```

pub mod core;
pub mod floor;
pub mod tenant;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, ConfigError};
pub use floor::{FloorError, FloorManager, ManagerError, ManagerResult};
pub use tenant::{TenantError, authorize_host, find_store, resolve_store_slug};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_from_config, init_logger_with_file};
