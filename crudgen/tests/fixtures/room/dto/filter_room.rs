//! Query parameters for searching rooms

use crudgen::prelude::*;

/// Query accepted by `GET /room/filter/search`
pub type FilterRoomDto = FilterQuery;
