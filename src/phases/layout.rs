// HEC-RAS control positions on the 1920x1080 reference layout, windows in their
// default places.

use crate::core::coords::{pt, Point};

/// Main HEC-RAS window.
pub mod main_window {
    use super::*;

    pub const FILE_MENU: Point = pt(18, 44);
    pub const NEW_PROJECT: Point = pt(71, 72);
    pub const OPTIONS_MENU: Point = pt(199, 42);
    pub const UNIT_SYSTEM: Point = pt(250, 127);
    pub const SI_UNITS: Point = pt(301, 270);
    pub const SET_AS_DEFAULT: Point = pt(364, 322);
    pub const UNIT_SYSTEM_OK: Point = pt(300, 295);
    pub const SAVE_PROJECT: Point = pt(53, 78);
    pub const RAS_MAPPER: Point = pt(469, 71);
    pub const RAS_MAPPER_AFTER_RUN: Point = pt(471, 71);
    pub const GEOMETRY_EDITOR: Point = pt(83, 72);
    pub const UNSTEADY_FLOW_EDITOR: Point = pt(183, 70);
    pub const UNSTEADY_ANALYSIS: Point = pt(324, 72);
    pub const TITLE_BAR: Point = pt(139, 10);
    pub const SAVE_AFTER_RUN: Point = pt(49, 71);
    pub const SAVE_ON_EXIT: Point = pt(52, 70);
}

/// New Project dialog.
pub mod new_project {
    use super::*;

    pub const DOCUMENTS: Point = pt(909, 91);
    pub const NEW_FOLDER: Point = pt(447, 653);
    pub const FOLDER_NAME: Point = pt(444, 458);
    pub const FOLDER_NAME_OK: Point = pt(444, 495);
    pub const SELECT_FOLDER: Point = pt(1018, 590);
    pub const TITLE: Point = pt(185, 121);
    pub const FILE_NAME_END: Point = pt(568, 120);
    pub const FILE_NAME_START: Point = pt(382, 120);
    pub const OK: Point = pt(1053, 630);
    pub const DESCRIPTION: Point = pt(121, 245);
}

/// Windows open-file dialog raised from RAS Mapper.
pub mod file_dialog {
    use super::*;

    pub const TERRAIN_PATH_BAR: Point = pt(1503, 229);
    pub const PATH_BAR: Point = pt(1472, 233);
    pub const FILE_NAME: Point = pt(594, 927);
    pub const OPEN: Point = pt(1698, 965);
}

/// RAS Mapper window and its layer tree.
pub mod mapper {
    use super::*;

    pub const TITLE_BAR: Point = pt(681, 16);
    pub const PROJECT_MENU: Point = pt(80, 38);
    pub const SET_PROJECTION: Point = pt(110, 71);
    pub const PROJECTION_PATH: Point = pt(887, 310);
    pub const FILE_MENU: Point = pt(21, 44);
    pub const SAVE: Point = pt(46, 95);
    pub const ZOOM_TO_EXTENT: Point = pt(563, 74);
    pub const EDITING_ARROW: Point = pt(501, 70);
    pub const STOP_EDITING: Point = pt(500, 41);
    pub const RESET_VIEW: Point = pt(561, 73);
    pub const CLOSE_VIEW: Point = pt(561, 74);
    pub const CONFIRM_CLOSE: Point = pt(923, 612);

    pub const TERRAINS: Point = pt(76, 207);
    pub const CREATE_TERRAIN_MENU: Point = pt(111, 248);
    pub const ADD_TERRAIN_FILE: Point = pt(544, 389);
    pub const CREATE_TERRAIN: Point = pt(1244, 711);

    pub const MAP_LAYERS: Point = pt(94, 186);
    pub const CREATE_LAYER_MENU: Point = pt(183, 274);
    pub const LAND_COVER_LAYER: Point = pt(527, 281);
    pub const SOILS_LAYER: Point = pt(531, 301);
    pub const ADD_LAYER_FILE: Point = pt(543, 274);
    pub const CREATE_LAYER: Point = pt(1250, 834);
    pub const MAP_LAYERS_CHECK: Point = pt(40, 188);
    pub const MAP_LAYERS_COLLAPSE: Point = pt(16, 187);

    pub const GEOMETRIES: Point = pt(96, 127);
    pub const ADD_GEOMETRY: Point = pt(133, 142);
    pub const ADD_GEOMETRY_OK: Point = pt(1072, 576);
    pub const NEW_GEOMETRY: Point = pt(107, 143);
    pub const EDIT_GEOMETRY: Point = pt(253, 201);
    pub const EXPAND_2D_AREAS: Point = pt(65, 230);
}

/// 2D flow area perimeter, breaklines and mesh editing inside RAS Mapper.
pub mod flow_area {
    use super::*;

    /// The perimeter node needs a few nearby right-clicks before its menu opens.
    pub const PERIMETERS: [Point; 3] = [pt(137, 242), pt(135, 242), pt(133, 242)];
    pub const IMPORT_PERIMETERS: Point = pt(216, 507);
    pub const PERIMETER_SOURCE: Point = pt(1360, 202);
    pub const IMPORT_OK: Point = pt(1247, 844);

    pub const PERIMETER_NODE: Point = pt(113, 221);
    pub const ATTRIBUTE_TABLE: Point = pt(171, 260);
    pub const NAME_CELL: Point = pt(696, 398);

    pub const BREAKLINES: [Point; 3] = [pt(137, 281), pt(135, 281), pt(133, 281)];
    pub const IMPORT_BREAKLINES: Point = pt(192, 539);
    pub const BREAKLINE_SOURCE: Point = pt(1354, 200);
    pub const BOUNDARY_CONDITION_TOOL: Point = pt(172, 422);

    pub const FLOW_AREAS: Point = pt(102, 222);
    pub const FLOW_AREA_EDITOR: Point = pt(147, 326);
    pub const SPACING_DX: Point = pt(879, 421);
    pub const SPACING_DY: Point = pt(972, 420);
    pub const MANNINGS_N: Point = pt(879, 635);
    pub const GENERATE_POINTS: Point = pt(842, 544);
    pub const FORCE_RECOMPUTE: Point = pt(763, 713);

    pub const BREAKLINE_NODE: Point = pt(127, 282);
    pub const BREAKLINE_PROPERTIES: Point = pt(187, 385);
    pub const NEAR_SPACING_COLUMN: Point = pt(942, 449);
    pub const REPEATS_COLUMN: Point = pt(1064, 447);
    pub const FAR_SPACING_COLUMN: Point = pt(1200, 450);
    pub const SET_VALUE: Point = pt(1135, 406);
    pub const VALUE_FIELD: Point = pt(764, 573);
    pub const VALUE_OK: Point = pt(1118, 470);
    pub const BREAKLINE_OK: Point = pt(1185, 639);

    pub const FLOW_AREAS_AGAIN: Point = pt(102, 224);
    pub const RECOMPUTE_ALL: Point = pt(161, 348);
    pub const PERIMETER_MESH: Point = pt(127, 241);
    pub const FIX_ALL_MESHES: Point = pt(199, 428);
    pub const FIX_MESH_FOCUS: Point = pt(162, 262);
}

/// Geometric data editor.
pub mod geometry_editor {
    use super::*;

    pub const FILE_MENU: Point = pt(15, 36);
    pub const OPEN: Point = pt(61, 92);
    pub const FIRST_GEOMETRY: Point = pt(531, 360);
    pub const OPEN_OK: Point = pt(1271, 800);
    pub const SAVE: Point = pt(51, 118);
    pub const TITLE_BAR: Point = pt(1385, 7);
}

/// Unsteady flow data editor and its precipitation dialog.
pub mod unsteady_flow {
    use super::*;

    pub const STORAGE_AREAS_TAB: Point = pt(559, 473);
    pub const NORMAL_DEPTH: Point = pt(547, 217);
    pub const FRICTION_SLOPE: Point = pt(1174, 508);
    pub const FRICTION_SLOPE_START: Point = pt(1089, 508);
    pub const FRICTION_SLOPE_OK: Point = pt(1008, 619);

    pub const ADD_AREA: Point = pt(631, 335);
    pub const FIRST_AREA: Point = pt(779, 457);
    pub const ADD_ARROW: Point = pt(962, 532);
    pub const ADD_AREA_OK: Point = pt(1006, 666);

    pub const BOUNDARY_CELL: Point = pt(840, 473);
    pub const PRECIPITATION: Point = pt(706, 280);
    pub const FIXED_START_TIME: Point = pt(834, 315);
    pub const INTERVAL_COMBO: Point = pt(1478, 247);
    pub const START_DATE: Point = pt(1083, 312);
    pub const START_TIME: Point = pt(1238, 316);
    pub const NO_ORDINATES: Point = pt(859, 347);
    pub const ORDINATE_COUNT: Point = pt(857, 438);
    pub const FIRST_CELL: Point = pt(1362, 441);
    pub const PLOT_DATA: Point = pt(1218, 847);
    pub const PLOT_TABLE_TAB: Point = pt(1796, 153);
    pub const PLOT_TITLE_BAR: Point = pt(1318, 14);
    pub const PRECIPITATION_OK: Point = pt(1321, 848);

    pub const FILE_MENU: Point = pt(465, 44);
    pub const SAVE_AS: Point = pt(536, 132);
    pub const TITLE: Point = pt(35, 120);
    pub const SAVE_OK: Point = pt(79, 652);
}

/// Unsteady flow analysis (plan) window.
pub mod analysis {
    use super::*;

    pub const PROGRAMS: [Point; 4] = [pt(624, 400), pt(624, 421), pt(624, 458), pt(621, 501)];
    pub const START_DATE: Point = pt(804, 548);
    pub const END_DATE: Point = pt(813, 575);
    pub const START_TIME: Point = pt(1155, 546);
    pub const END_TIME: Point = pt(1158, 577);
    pub const SHORT_ID: Point = pt(1041, 297);
    pub const COMPUTATION_INTERVAL: Point = pt(884, 623);
    pub const HYDROGRAPH_INTERVAL: Point = pt(1207, 624);
    pub const MAPPING_INTERVAL: Point = pt(883, 650);
    pub const DETAILED_INTERVAL: Point = pt(1206, 649);
    pub const FILE_MENU: Point = pt(614, 265);
    pub const SAVE_PLAN_AS: Point = pt(651, 349);
    pub const PLAN_TITLE: Point = pt(40, 119);
    pub const PLAN_TITLE_OK: Point = pt(74, 655);
    pub const SHORT_ID_OK: Point = pt(897, 612);
    pub const COMPUTE: Point = pt(914, 792);
    pub const CLOSE_COMPUTE: Point = pt(1856, 989);
    pub const WINDOW_FOCUS: Point = pt(918, 240);
}

/// RAS Mapper results view.
pub mod results {
    use super::*;

    pub const ZOOM_TO_EXTENT: Point = pt(563, 73);
    pub const RESULTS_EXPAND: Point = pt(16, 267);
    pub const PLAN_RESULTS: Point = pt(64, 286);
    pub const GEOMETRY_CHECK: Point = pt(38, 126);
    pub const MAP_LAYERS_CHECK: Point = pt(38, 406);
    pub const RESET_ANIMATION: Point = pt(1042, 74);
    pub const EDIT_SURFACE: Point = pt(935, 468);
    pub const RAMP_MAX: Point = pt(812, 313);
    pub const RAMP_MIN: Point = pt(814, 344);
    pub const RAMP_VALUES: Point = pt(950, 346);
    pub const CREATE_RAMP: Point = pt(1125, 336);
    pub const SYMBOLOGY_OK: Point = pt(1065, 834);
    pub const PROPERTIES_FOCUS: Point = pt(946, 239);
    pub const MIN_PROFILE: Point = pt(1003, 72);
    pub const MAX_PROFILE: Point = pt(957, 73);
    pub const FILE_MENU: Point = pt(32, 43);
    pub const SAVE: Point = pt(41, 89);
}

/// Snipping Tool overlay and screen recorder.
pub mod capture {
    use super::*;

    pub const PLOT_REGION: (Point, Point) = (pt(3, 58), pt(1916, 1017));
    pub const MAP_REGION: (Point, Point) = (pt(489, 100), pt(1915, 1008));
    pub const RECORD_MODE: Point = pt(909, 29);
    pub const MUTE: Point = pt(1054, 40);
    pub const START: Point = pt(845, 39);
    pub const STOP: Point = pt(875, 39);
    pub const PLAY_ANIMATION: Point = pt(1799, 78);
    pub const PARK_CURSOR: Point = pt(1799, 8);
    pub const RECORDER_TITLE_BAR: Point = pt(1235, 20);
    pub const SAVE_FOLDER_BAR: Point = pt(1182, 101);
    pub const SAVE_BUTTON: Point = pt(1230, 597);
}
