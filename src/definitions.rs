//! Named error codes, grouped by subsystem.
//!
//! Every code used anywhere in the query service is declared here exactly
//! once. Each group is declared through [`define_error_codes!`], which checks
//! at compile time that the value lies inside the subsystem's range and
//! exports a registry slice listing the group's `(name, code)` pairs.
//!
//! Codes are never reassigned. A retired code stays declared (or leaves a
//! gap) so that old logs keep their meaning.
//!
//! The `tests` module at the bottom rejects duplicate values across groups.

use crate::{define_error_codes, ErrorCode, Subsystem};

/// Every registry slice, in ascending range order.
pub const ALL_CODES: &[&[(&str, ErrorCode)]] = &[
    SHELL_CODES,
    SERVICE_CODES,
    ADMIN_CODES,
    SEMANTICS_CODES,
    PLAN_CODES,
    EXECUTION_CODES,
    SCHEDULER_CODES,
    TOOLING_CODES,
    FEATURE_CODES,
    SYSTEM_DATASTORE_CODES,
    COUCHBASE_DATASTORE_CODES,
    INDEX_SCAN_CODES,
    FILE_DATASTORE_CODES,
    OTHER_DATASTORE_CODES,
    TRANSACTION_CODES,
    DICTIONARY_CODES,
    VIRTUAL_CODES,
    SEQUENCE_CODES,
    NATURAL_LANGUAGE_CODES,
    AUS_CODES,
];

// -----------------------------------------------------------------------------
// Shell (100-999) - Client tooling: connections, history, commands
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Shell, SHELL_CODES => {
        E_SHELL_CONNECTION_REFUSED      = 100,
        E_SHELL_UNSUPPORTED_PROTOCOL    = 101,
        E_SHELL_NO_SUCH_HOST            = 102,
        E_SHELL_NO_HOST_IN_REQUEST_URL  = 103,
        E_SHELL_UNKNOWN_PORT_TCP        = 104,
        E_SHELL_NO_ROUTE_TO_HOST        = 105,
        E_SHELL_UNREACHABLE_NETWORK     = 106,
        E_SHELL_NO_CONNECTION           = 107,
        E_SHELL_DRIVER_OPEN             = 108,
        E_SHELL_INVALID_URL             = 109,
        E_SHELL_READ_FILE               = 116,
        E_SHELL_WRITE_FILE              = 117,
        E_SHELL_OPEN_FILE               = 118,
        E_SHELL_CLOSE_FILE              = 119,
        E_SHELL_INVALID_PASSWORD        = 121,
        E_SHELL_INVALID_USERNAME        = 122,
        E_SHELL_MISSING_CREDENTIAL      = 123,
        E_SHELL_INVALID_CREDENTIAL      = 124,
        E_SHELL_NO_SUCH_COMMAND         = 136,
        E_SHELL_NO_SUCH_PARAM           = 137,
        E_SHELL_TOO_MANY_ARGS           = 138,
        E_SHELL_TOO_FEW_ARGS            = 139,
        E_SHELL_STACK_EMPTY             = 140,
        E_SHELL_NO_SUCH_ALIAS           = 141,
        E_SHELL_BATCH_MODE              = 142,
        E_SHELL_STRING_WRITE            = 143,
        E_SHELL_OPERATION_TIMEOUT       = 170,
        E_SHELL_ROWS_SCAN               = 171,
        E_SHELL_JSON_MARSHAL            = 172,
        E_SHELL_JSON_UNMARSHAL          = 173,
        E_SHELL_DRIVER_QUERY_METHOD     = 174,
        E_SHELL_WRITER_OUTPUT           = 175,
        E_SHELL_UNBALANCED_QUOTES       = 176,
        E_SHELL_ROWS_CLOSE              = 177,
        E_SHELL_CMD_LINE_ARGS           = 178,
        E_SHELL_INVALID_INPUT_ARGUMENTS = 179,
        E_SHELL_ON_REFRESH              = 180,
        E_SHELL_INVALID_ARGUMENT        = 181,
        E_SHELL_INIT_FAILURE            = 182,
        E_SHELL_INVALID_PROTOCOL        = 183,
        E_SHELL_UNKNOWN                 = 199,
    }
}

// -----------------------------------------------------------------------------
// Service (1000-1999) - Request handling and endpoint parameters
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Service, SERVICE_CODES => {
        E_SERVICE_READONLY                        = 1000,
        E_SERVICE_HTTP_UNSUPPORTED_METHOD         = 1010,
        E_SERVICE_NOT_IMPLEMENTED                 = 1020,
        E_SERVICE_UNRECOGNIZED_VALUE              = 1030,
        E_SERVICE_BAD_VALUE                       = 1040,
        E_SERVICE_MISSING_VALUE                   = 1050,
        E_SERVICE_MULTIPLE_VALUES                 = 1060,
        E_SERVICE_UNRECOGNIZED_PARAMETER          = 1065,
        E_SERVICE_TYPE_MISMATCH                   = 1070,
        E_SERVICE_TIMEOUT                         = 1080,
        E_SERVICE_INVALID_VALUE                   = 1090,
        E_SERVICE_INVALID_JSON                    = 1100,
        E_SERVICE_CLIENTID                        = 1110,
        E_SERVICE_MEDIA_TYPE                      = 1120,
        E_SERVICE_HTTP_REQ                        = 1130,
        E_SERVICE_SCAN_VECTOR_BAD_LENGTH          = 1140,
        E_SERVICE_SCAN_VECTOR_BAD_SEQUENCE_NUMBER = 1150,
        E_SERVICE_SCAN_VECTOR_BADUUID             = 1155,
        E_SERVICE_DECODE_NIL                      = 1160,
        E_SERVICE_HTTP_METHOD                     = 1170,
        E_SERVICE_SHUTTING_DOWN                   = 1180,
        E_SERVICE_SHUT_DOWN                       = 1181,
        E_SERVICE_UNAVAILABLE                     = 1182,
        E_SERVICE_USER_REQUEST_EXCEEDED           = 1191,
        E_SERVICE_USER_REQUEST_RATE_EXCEEDED      = 1192,
        E_SERVICE_USER_REQUEST_SIZE_EXCEEDED      = 1193,
        E_SERVICE_USER_RESULT_SIZE_EXCEEDED       = 1194,
        E_REQUEST_ERROR_LIMIT                     = 1195,
        E_SERVICE_TENANT_THROTTLED                = 1196,
        E_SERVICE_TENANT_MISSING                  = 1197,
        E_SERVICE_TENANT_NOT_AUTHORIZED           = 1198,
        E_SERVICE_TENANT_REJECTED                 = 1199,
        E_SERVICE_TENANT_NOT_FOUND                = 1200,
        E_SERVICE_REQUEST_QUEUE_FULL              = 1201,
        E_SERVICE_NO_CLIENT                       = 1202,
        E_SERVICE_SLOW_CLIENT                     = 1203,
    }
}

// -----------------------------------------------------------------------------
// Admin (2000-2999) - Clustering, accounting and administrative endpoints
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Admin, ADMIN_CODES => {
        E_ADMIN_CONNECTION                     = 2000,
        E_ADMIN_START                          = 2001,
        E_ADMIN_INVALIDURL                     = 2010,
        E_ADMIN_DECODING                       = 2020,
        E_ADMIN_ENCODING                       = 2030,
        E_ADMIN_UNKNOWN_SETTING                = 2031,
        E_ADMIN_SETTING_TYPE                   = 2032,
        E_ADMIN_GET_CLUSTER                    = 2040,
        E_ADMIN_ADD_CLUSTER                    = 2050,
        E_ADMIN_REMOVE_CLUSTER                 = 2060,
        E_ADMIN_GET_NODE                       = 2070,
        E_ADMIN_NO_NODE                        = 2080,
        E_ADMIN_ADD_NODE                       = 2090,
        E_ADMIN_REMOVE_NODE                    = 2100,
        E_ADMIN_MAKE_METRIC                    = 2110,
        E_ADMIN_AUTH                           = 2120,
        E_ADMIN_ENDPOINT                       = 2130,
        E_ADMIN_SSL_NOT_ENABLED                = 2140,
        E_ADMIN_CREDS                          = 2150,
        E_COMPLETED_QUALIFIER_EXISTS           = 2160,
        E_COMPLETED_QUALIFIER_UNKNOWN          = 2170,
        E_COMPLETED_QUALIFIER_NOT_FOUND        = 2180,
        E_COMPLETED_QUALIFIER_NOT_UNIQUE       = 2190,
        E_COMPLETED_QUALIFIER_INVALID_ARGUMENT = 2200,
        E_COMPLETED_BAD_MAX_SIZE               = 2201,
        E_ADMIN_BAD_SERVICE_PORT               = 2210,
        E_ADMIN_BODY                           = 2220,
        E_ADMIN_FFDC                           = 2230,
        E_ADMIN_LOG                            = 2240,
        E_AWR_START                            = 2500,
        E_AWR_SETTING                          = 2501,
        E_AWR_CONFIG                           = 2502,
        E_AWR_DISTRIB                          = 2503,
    }
}

// -----------------------------------------------------------------------------
// Semantics (3000-3999) - Parsing and semantic checks
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Semantics, SEMANTICS_CODES => {
        E_PARSE_SYNTAX                          = 3000,
        E_ERROR_CONTEXT                         = 3005,
        E_PARSE_INVALID_ESCAPE_SEQUENCE         = 3006,
        E_PARSE_INVALID_STRING                  = 3007,
        E_PARSE_MISSING_CLOSING_QUOTE           = 3008,
        E_PARSE_UNESCAPED_EMBEDDED_QUOTE        = 3009,
        E_AMBIGUOUS_REFERENCE                   = 3080,
        E_DUPLICATE_VARIABLE                    = 3081,
        E_FORMALIZER_INTERNAL                   = 3082,
        E_PARSE_INVALID_INPUT                   = 3083,
        E_SEMANTICS                             = 3100,
        E_SEMANTICS_INTERNAL                    = 3101,
        E_JOIN_NEST_NO_JOIN_HINT                = 3110,
        E_JOIN_NEST_NO_USE_KEYS                 = 3120,
        E_JOIN_NEST_NO_USE_INDEX                = 3130,
        E_MERGE_INSERT_NO_KEY                   = 3150,
        E_MERGE_INSERT_MISSING_KEY              = 3160,
        E_MERGE_MISSING_SOURCE                  = 3170,
        E_MERGE_NO_INDEX_HINT                   = 3180,
        E_MERGE_NO_JOIN_HINT                    = 3190,
        E_MIXED_JOIN                            = 3200,
        E_WINDOW_SEMANTIC                       = 3220,
        E_ENTERPRISE_FEATURE                    = 3230,
        E_ADVISE_UNSUPPORTED_STMT               = 3250,
        E_ADVISOR_PROJ_ONLY                     = 3255,
        E_ADVISOR_NO_FROM                       = 3256,
        E_MHDP_ONLY_FEATURE                     = 3260,
        E_MISSING_USE_KEYS                      = 3261,
        E_HAS_USE_INDEXES                       = 3262,
        E_UPDATE_STAT_INVALID_INDEX_TYPE        = 3270,
        E_UPDATE_STAT_INDEX_ALL_COLLECTION_ONLY = 3271,
        E_UPDATE_STAT_SELF_NOTALLOWED           = 3272,
        E_CREATE_INDEX_NOT_INDEXABLE            = 3280,
        E_CREATE_INDEX_ATTRIBUTE_MISSING        = 3281,
        E_CREATE_INDEX_ATTRIBUTE                = 3282,
        E_FLATTEN_KEYS                          = 3283,
        E_ALL_DISTINCT_NOT_ALLOWED              = 3284,
        E_CREATE_INDEX_SELF_NOTALLOWED          = 3285,
        E_INDEX_NOT_ALLOWED                     = 3286,
        E_JOIN_HINT_FIRST_FROM_TERM             = 3290,
        E_ORDER_BY_VALIDATION_FAIL              = 3291,
        E_RECURSIVE_WITH_SEMANTIC               = 3300,
        E_ANCHOR_RECURSIVE_REF                  = 3301,
        E_MORE_THAN_ONE_RECURSIVE_REF           = 3302,
        E_CONFIG_INVALID_OPTION                 = 3303,
        E_RECURSION_UNSUPPORTED                 = 3304,
        E_RECURSIVE_IMPLICIT_DOC_LIMIT          = 3305,
        E_RECURSIVE_IMPLICIT_DEPTH_LIMIT        = 3306,
        E_CYCLE_FIELDS_VALIDATION_FAILED        = 3307,
        E_VECTOR_SEMANTIC                       = 3400,
        E_VECTOR_INDEX_ATTRIBUTE                = 3401,
        E_VECTOR_INDEX_SINGLE_VECTOR            = 3402,
        E_VECTOR_INDEX_SINGLE_KEY               = 3403,
        E_VECTOR_INDEX_NO_VECTOR                = 3404,
        E_VECTOR_FUNC_ORDER_CONST               = 3405,
        E_VECTOR_FUNC_ORDER_OPTION              = 3406,
        E_VECTOR_DISTINCT_ARRAY_KEY             = 3407,
        E_VECTOR_CONSTANT_INDEX_KEY             = 3408,
    }
}

// -----------------------------------------------------------------------------
// Plan (4000-4999) - Planning and prepared statements
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Plan, PLAN_CODES => {
        E_PLAN                           = 4000,
        E_REPREPARE                      = 4001,
        E_NO_TERM_NAME                   = 4010,
        E_DUPLICATE_ALIAS                = 4020,
        E_DUPLICATE_WITH_ALIAS           = 4021,
        E_UNKNOWN_FOR                    = 4025,
        E_SUBQUERY_MISSING_KEYS          = 4030,
        E_SUBQUERY_MISSING_INDEX         = 4035,
        E_SUBQUERY_PRIMARY_DOCS_EXCEEDED = 4036,
        E_NO_SUCH_PREPARED               = 4040,
        E_UNRECOGNIZED_PREPARED          = 4050,
        E_PREPARED_NAME                  = 4060,
        E_PREPARED_DECODING              = 4070,
        E_PREPARED_ENCODING_MISMATCH     = 4080,
        E_ENCODING_NAME_MISMATCH         = 4090,
        E_ENCODING_CONTEXT_MISMATCH      = 4091,
        E_PREDEFINED_PREPARED_NAME       = 4092,
        E_NO_INDEX_JOIN                  = 4100,
        E_USE_KEYS_USE_INDEXES           = 4110,
        E_NO_INDEX_SERVICE               = 4115,
        E_NO_PRIMARY_INDEX               = 4120,
        E_PRIMARY_INDEX_OFFLINE          = 4125,
        E_LIST_SUBQUERIES                = 4130,
        E_NOT_GROUP_KEY_OR_AGG           = 4210,
        E_INDEX_ALREADY_EXISTS           = 4300,
        E_AMBIGUOUS_META                 = 4310,
        E_INDEXER_DESC_COLLATION         = 4320,
        E_PLAN_INTERNAL                  = 4321,
        E_ALTER_INDEX                    = 4322,
        E_PLAN_NO_PLACEHOLDER            = 4323,
        E_NO_ANSI_JOIN                   = 4330,
        E_PARTITION_INDEX_NOT_SUPPORTED  = 4340,
        E_GSI                            = 4350,
        W_GSI_TRANSIENT                  = 4360,
        E_GSI_TEMP_FILE_SIZE             = 4370,
        E_NO_KNN_SEARCH_INDEX            = 4380,
        E_ENCODED_PLAN_NOT_ALLOWED       = 4400,
        E_CBO                            = 4600,
        E_INDEX_STAT                     = 4610,
        W_DOCUMENT_KEY_TYPE              = 4998,
        W_GENERIC                        = 4999,
    }
}

// -----------------------------------------------------------------------------
// Execution (5000-5999) - Operator execution
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Execution, EXECUTION_CODES => {
        E_INTERNAL                                = 5000,
        E_EXECUTION_PANIC                         = 5001,
        E_EXECUTION_INTERNAL                      = 5002,
        E_EXECUTION_PARAMETER                     = 5003,
        E_PARSING                                 = 5004,
        E_TEMP_FILE_QUOTA                         = 5005,
        E_EXECUTION_KEY_VALIDATION                = 5006,
        E_EXECUTION_CURL                          = 5007,
        E_EXECUTION_STATEMENT_STOPPED             = 5008,
        E_EVALUATION                              = 5010,
        E_EVALUATION_ABORT                        = 5011,
        E_EXPLAIN                                 = 5015,
        E_EXPLAIN_FUNCTION                        = 5017,
        E_GROUP_UPDATE                            = 5020,
        W_DATE                                    = 5021,
        W_DATE_OVERFLOW                           = 5022,
        W_DATE_INVALID_FORMAT                     = 5023,
        W_DATE_INVALID_DATE_STRING                = 5024,
        W_DATE_PARSE_FAILED                       = 5025,
        W_DATE_INVALID_COMPONENT                  = 5026,
        W_DATE_NON_INT_VALUE                      = 5027,
        W_DATE_INVALID_ARGUMENT                   = 5028,
        W_DATE_INVALID_TIMEZONE                   = 5029,
        E_INVALID_VALUE                           = 5030,
        E_INVALID_EXPRESSION                      = 5031,
        E_UNSUPPORTED_EXPRESSION                  = 5032,
        E_RANGE                                   = 5035,
        W_DIVIDE_BY_ZERO                          = 5036,
        E_DUPLICATE_FINAL_GROUP                   = 5040,
        E_INSERT_KEY                              = 5050,
        E_INSERT_VALUE                            = 5060,
        E_INSERT_KEY_TYPE                         = 5070,
        E_INSERT_OPTIONS_TYPE                     = 5071,
        E_UPSERT_KEY                              = 5072,
        E_UPSERT_KEY_ALREADY_MUTATED              = 5073,
        E_UPSERT_VALUE                            = 5075,
        E_UPSERT_KEY_TYPE                         = 5078,
        E_UPSERT_OPTIONS_TYPE                     = 5079,
        E_DELETE_ALIAS_MISSING                    = 5080,
        E_DELETE_ALIAS_METADATA                   = 5090,
        E_UPDATE_ALIAS_MISSING                    = 5100,
        E_UPDATE_ALIAS_METADATA                   = 5110,
        E_UPDATE_MISSING_CLONE                    = 5120,
        E_UPDATE_INVALID_FIELD                    = 5130,
        E_UNNEST_INVALID_POSITION                 = 5180,
        E_SCAN_VECTOR_TOO_MANY_SCANNED_BUCKETS    = 5190,
        E_DYNAMIC_AUTH                            = 5201,
        E_TRANSACTIONAL_AUTH                      = 5202,
        E_USER_NOT_FOUND                          = 5210,
        E_USER_EXISTS                             = 5211,
        E_USER_ATTRIBUTE                          = 5212,
        E_GROUP_EXISTS                            = 5213,
        E_GROUP_NOT_FOUND                         = 5214,
        E_GROUP_ATTRIBUTE                         = 5215,
        E_MISSING_ATTRIBUTES                      = 5216,
        E_ROLE_REQUIRES_KEYSPACE                  = 5220,
        E_ROLE_INCORRECT_LEVEL                    = 5221,
        E_ROLE_TAKES_NO_KEYSPACE                  = 5230,
        E_NO_SUCH_KEYSPACE                        = 5240,
        E_NO_SUCH_SCOPE                           = 5241,
        E_NO_SUCH_BUCKET                          = 5242,
        E_ROLE_NOT_FOUND                          = 5250,
        W_ROLE_ALREADY_PRESENT                    = 5260,
        W_ROLE_NOT_PRESENT                        = 5270,
        W_USER_WITH_NO_ROLES                      = 5280,
        W_GROUP_WITH_NO_ROLES                     = 5281,
        E_HASH_TABLE_PUT                          = 5300,
        E_HASH_TABLE_GET                          = 5310,
        E_MERGE_MULTI_UPDATE                      = 5320,
        E_MERGE_MULTI_INSERT                      = 5330,
        E_WINDOW_EVALUATION                       = 5340,
        E_ADVISE_INDEX                            = 5350,
        E_ADVISE_INVALID_RESULTS                  = 5351,
        E_UPDATE_STATISTICS                       = 5360,
        E_SUBQUERY_BUILD                          = 5370,
        E_INDEX_LEADING_KEY_MISSING_NOT_SUPPORTED = 5380,
        E_INDEX_NOT_IN_MEMORY                     = 5390,
        E_MISSING_SYSTEMCBO_STATS                 = 5400,
        E_INVALID_INDEX_NAME                      = 5410,
        E_INDEX_NOT_FOUND                         = 5411,
        E_INDEX_UPD_STATS                         = 5415,
        E_TIME_PARSE                              = 5416,
        E_JOIN_ON_PRIMARY_DOCS_EXCEEDED           = 5420,
        E_INVALID_QUERY_VECTOR                    = 5430,
        E_INVALID_PROBES                          = 5431,
        E_INVALID_RERANK                          = 5432,
        E_MAXHEAP_SIZE_EXCEEDED                   = 5433,
        E_MEMORY_QUOTA_EXCEEDED                   = 5500,
        E_NIL_EVALUATE_PARAM                      = 5501,
        E_BUCKET_ACTION                           = 5502,
        W_MISSING_KEY                             = 5503,
        E_NODE_QUOTA_EXCEEDED                     = 5600,
        E_TENANT_QUOTA_EXCEEDED                   = 5601,
        E_VALUE_RECONSTRUCT                       = 5700,
        E_VALUE_INVALID                           = 5701,
        E_VALUE_SPILL_CREATE                      = 5702,
        E_VALUE_SPILL_READ                        = 5703,
        E_VALUE_SPILL_WRITE                       = 5704,
        E_VALUE_SPILL_SIZE                        = 5705,
        E_VALUE_SPILL_SEEK                        = 5706,
        E_VALUE_SPILL_MAX_FILES                   = 5707,
    }
}

// -----------------------------------------------------------------------------
// Scheduler (6000-6999) - Scheduled tasks and rewrite
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Scheduler, SCHEDULER_CODES => {
        E_SCHEDULER              = 6001,
        E_DUPLICATE_TASK         = 6002,
        E_TASK_RUNNING           = 6003,
        E_TASK_NOT_FOUND         = 6004,
        E_TASK_INVALID_PARAMETER = 6005,
        E_REWRITE                = 6500,
    }
}

// -----------------------------------------------------------------------------
// Tooling (7000-9999) - Schema inference, migration and backup
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Tooling, TOOLING_CODES => {
        E_INFER_INVALID_OPTION              = 7000,
        E_INFER_OPTION_MUST_BE_NUMERIC      = 7001,
        E_INFER_READING_NUMBER              = 7002,
        E_INFER_NO_KEYSPACE_DOCUMENTS       = 7003,
        E_INFER_CREATE_RETRIEVER            = 7004,
        E_INFER_NO_RANDOM_ENTRY             = 7005,
        E_INFER_NO_RANDOM_DOCS              = 7006,
        E_INFER_MISSING_CONTEXT             = 7007,
        E_INFER_EXPRESSION_EVAL             = 7008,
        E_INFER_KEYSPACE_ERROR              = 7009,
        E_INFER_NO_SUITABLE_PRIMARY_INDEX   = 7010,
        E_INFER_NO_SUITABLE_SECONDARY_INDEX = 7011,
        W_INFER_TIMEOUT                     = 7012,
        W_INFER_SIZE_LIMIT                  = 7013,
        E_INFER_NO_DOCUMENTS                = 7014,
        E_INFER_CONNECT                     = 7015,
        E_INFER_GET_POOL                    = 7016,
        E_INFER_GET_BUCKET                  = 7017,
        W_INFER_INDEX                       = 7018,
        E_INFER_GET_RANDOM                  = 7019,
        E_INFER_NO_RANDOM_SCAN              = 7020,
        E_INFER_NO_SEQUENTIAL_SCAN          = 7021,
        E_INFER_NO_RETRIEVERS               = 7022,
        E_INFER_OPTIONS                     = 7023,
        E_INFER_NEXT_DOCUMENT               = 7024,
        W_INFER_INVALID_FLAGS               = 7025,
        W_INFER_INVALID_FLAG                = 7026,
        E_MIGRATION                         = 7200,
        E_MIGRATION_INTERNAL                = 7201,
        E_BACKUP_NOT_POSSIBLE               = 7300,
    }
}

// -----------------------------------------------------------------------------
// Feature (10000-10999) - Authorization, functions, advisor
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Feature, FEATURE_CODES => {
        E_DATASTORE_AUTHORIZATION          = 10000,
        E_FTS_MISSING_PORT_ERR             = 10003,
        E_NODE_INFO_ACCESS_ERR             = 10004,
        E_NODE_SERVICE_ERR                 = 10005,
        E_FUNCTIONS_NOT_SUPPORTED          = 10100,
        E_MISSING_FUNCTION                 = 10101,
        E_DUPLICATE_FUNCTION               = 10102,
        E_INTERNAL_FUNCTION                = 10103,
        E_ARGUMENTS_MISMATCH               = 10104,
        E_INVALID_FUNCTION_NAME            = 10105,
        E_FUNCTIONS_STORAGE                = 10106,
        E_FUNCTION_ENCODING                = 10107,
        E_FUNCTIONS_DISABLED               = 10108,
        E_FUNCTION_EXECUTION               = 10109,
        E_TOO_MANY_NESTED_FUNCTIONS        = 10112,
        E_INNER_FUNCTION_EXECUTION         = 10113,
        E_LIBRARY_PATH_ERROR               = 10114,
        E_FUNCTION_LOADING                 = 10115,
        E_FUNCTIONS_UNSUPPORTED_ACTION     = 10118,
        E_FUNCTION_STATEMENTS              = 10119,
        E_DATASTORE_INVALID_BUCKET_PARTS   = 10200,
        E_QUERY_CONTEXT                    = 10201,
        E_BUCKET_NO_DEFAULT_COLLECTION     = 10202,
        E_NO_DATASTORE                     = 10203,
        E_BUCKET_UPDATER_MAX_ERRORS        = 10300,
        E_BUCKET_UPDATER_NO_HEALTHY_NODES  = 10301,
        E_BUCKET_UPDATER_STREAM_ERROR      = 10302,
        E_BUCKET_UPDATER_AUTH_ERROR        = 10303,
        E_BUCKET_UPDATER_CONNECTION_FAILED = 10304,
        E_BUCKET_UPDATER_ERROR_MAPPING     = 10305,
        E_BUCKET_UPDATER_EP_NOT_FOUND      = 10306,
        E_ADVISOR_SESSION_NOT_FOUND        = 10500,
        E_ADVISOR_INVALID_ACTION           = 10501,
        E_ADVISOR_ACTION_MISSING           = 10502,
        E_ADVISOR_INVALID_ARGS             = 10503,
        E_VECTOR_FUNC_INVALID_METRIC       = 10510,
        E_VECTOR_FUNC_INVALID_FIELD        = 10511,
        E_IS_VECTOR_INVALID_DIMENSION      = 10512,
        E_IS_VECTOR_INVALID_ARG            = 10513,
    }
}

// -----------------------------------------------------------------------------
// System datastore (11000-11999) - System keyspaces
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::SystemDatastore, SYSTEM_DATASTORE_CODES => {
        E_SYSTEM_DATASTORE             = 11000,
        E_SYSTEM_KEYSPACE_NOT_FOUND    = 11002,
        E_SYSTEM_NOT_IMPLEMENTED       = 11003,
        E_SYSTEM_NOT_SUPPORTED         = 11004,
        E_SYSTEM_IDX_NOT_FOUND         = 11005,
        E_SYSTEM_IDX_NO_DROP           = 11006,
        E_SYSTEM_STMT_NOT_FOUND        = 11007,
        W_SYSTEM_REMOTE                = 11008,
        E_SYSTEM_UNABLE_TO_RETRIEVE    = 11009,
        E_SYSTEM_UNABLE_TO_UPDATE      = 11010,
        W_SYSTEM_FILTERED_ROWS         = 11011,
        E_SYSTEM_MALFORMED_KEY         = 11012,
        E_SYSTEM_NO_BUCKETS            = 11013,
        W_SYSTEM_REMOTE_NODE_NOT_FOUND = 11015,
    }
}

// -----------------------------------------------------------------------------
// Primary datastore (12000-13999) - Key-value and index access
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::CouchbaseDatastore, COUCHBASE_DATASTORE_CODES => {
        E_CB_CONNECTION                        = 12000,
        E_CB_NAMESPACE_NOT_FOUND               = 12002,
        E_CB_KEYSPACE_NOT_FOUND                = 12003,
        E_CB_PRIMARY_INDEX_NOT_FOUND           = 12004,
        E_CB_INDEXER_NOT_IMPLEMENTED           = 12005,
        E_CB_KEYSPACE_COUNT                    = 12006,
        E_CB_BULK_GET                          = 12008,
        E_CB_DML                               = 12009,
        E_CB_DELETE_FAILED                     = 12011,
        E_CB_LOAD_INDEXES                      = 12012,
        E_CB_BUCKET_TYPE_NOT_SUPPORTED         = 12013,
        E_CB_INDEX_SCAN_TIMEOUT                = 12015,
        E_CB_INDEX_NOT_FOUND                   = 12016,
        E_CB_GET_RANDOM_ENTRY                  = 12017,
        E_UNABLE_TO_INIT_CB_AUTH               = 12018,
        E_AUDIT_STREAM_HANDLER_FAILED          = 12019,
        E_CB_BUCKET_NOT_FOUND                  = 12020,
        E_CB_SCOPE_NOT_FOUND                   = 12021,
        E_CB_KEYSPACE_SIZE                     = 12022,
        E_CB_SECURITY_CONFIG_NOT_PROVIDED      = 12023,
        E_CB_CREATE_SYSTEM_BUCKET              = 12024,
        E_CB_BUCKET_CREATE_SCOPE               = 12025,
        E_CB_BUCKET_DROP_SCOPE                 = 12026,
        E_CB_BUCKET_CREATE_COLLECTION          = 12027,
        E_CB_BUCKET_DROP_COLLECTION            = 12028,
        E_CB_BUCKET_FLUSH_COLLECTION           = 12029,
        E_BINARY_DOCUMENT_MUTATION             = 12030,
        E_DURABILITY_NOT_SUPPORTED             = 12031,
        E_PRESERVE_EXPIRY_NOT_SUPPORTED        = 12032,
        E_CAS_MISMATCH                         = 12033,
        E_DML_MC                               = 12034,
        E_CB_NOT_PRIMARY_INDEX                 = 12035,
        E_DML_INSERT                           = 12036,
        E_ACCESS_DENIED                        = 12037,
        E_WITH_INVALID_OPTION                  = 12038,
        E_WITH_INVALID_TYPE                    = 12039,
        E_INVALID_COMPRESSED_VALUE             = 12040,
        E_CB_BUCKET_CLOSED                     = 12041,
        E_CB_SUBDOC_GET                        = 12042,
        E_CB_SUBDOC_SET                        = 12043,
        E_CB_DROP_SYSTEM_BUCKET                = 12044,
        E_CB_BUCKET_EXISTS                     = 12045,
        E_INDEXER_VERSION                      = 12046,
        E_CB_SYS_COLLECTION_PRIMARY_INDEX      = 12047,
        E_DATASTORE_CLUSTER                    = 13012,
        E_DATASTORE_UNABLE_TO_RETRIEVE_ROLES   = 13013,
        E_DATASTORE_INSUFFICIENT_CREDENTIALS   = 13014,
        E_DATASTORE_UNABLE_TO_RETRIEVE_BUCKETS = 13015,
        E_DATASTORE_NO_ADMIN                   = 13016,
        E_DATASTORE_NOT_SET                    = 13017,
        E_DATASTORE_INVALID_URI                = 13018,
    }
}

// -----------------------------------------------------------------------------
// Index scan (14000-14999) - Index scans
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::IndexScan, INDEX_SCAN_CODES => {
        E_INDEX_SCAN_SIZE = 14000,
    }
}

// -----------------------------------------------------------------------------
// File datastore (15000-15999) - File-backed datastore
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::FileDatastore, FILE_DATASTORE_CODES => {
        E_FILE_DATASTORE           = 15000,
        E_FILE_NAMESPACE_NOT_FOUND = 15001,
        E_FILE_KEYSPACE_NOT_FOUND  = 15002,
        E_FILE_DUPLICATE_NAMESPACE = 15003,
        E_FILE_DUPLICATE_KEYSPACE  = 15004,
        E_FILE_NO_KEYS_INSERT      = 15005,
        E_FILE_KEY_EXISTS          = 15006,
        E_FILE_DML                 = 15007,
        E_FILE_KEYSPACE_NOT_DIR    = 15008,
        E_FILE_IDX_NOT_FOUND       = 15009,
        E_FILE_NOT_SUPPORTED       = 15010,
        E_FILE_PRIMARY_IDX_NO_DROP = 15011,
    }
}

// -----------------------------------------------------------------------------
// Other datastores (16000-16999) - Mock and other datastores
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::OtherDatastore, OTHER_DATASTORE_CODES => {
        E_OTHER_DATASTORE           = 16000,
        E_OTHER_NAMESPACE_NOT_FOUND = 16001,
        E_OTHER_KEYSPACE_NOT_FOUND  = 16002,
        E_OTHER_NOT_IMPLEMENTED     = 16003,
        E_OTHER_IDX_NOT_FOUND       = 16004,
        E_OTHER_IDX_NO_DROP         = 16005,
        E_OTHER_NOT_SUPPORTED       = 16006,
        E_OTHER_KEY_NOT_FOUND       = 16007,
        E_INFERENCER_NOT_FOUND      = 16020,
        E_OTHER_NO_BUCKETS          = 16021,
        E_SCOPES_NOT_SUPPORTED      = 16022,
        E_STAT_UPDATER_NOT_FOUND    = 16030,
        E_NO_FLUSH                  = 16040,
        E_SS_IDX_NOT_FOUND          = 16050,
        E_SS_NOT_SUPPORTED          = 16051,
        E_SS_INACTIVE               = 16052,
        E_SS_INVALID                = 16053,
        E_SS_CONTINUE               = 16054,
        E_SS_CREATE                 = 16055,
        E_SS_CANCEL                 = 16056,
        E_SS_TIMEOUT                = 16057,
        E_SS_CID_GET                = 16058,
        E_SS_CONN                   = 16059,
        E_SS_FETCH_WAIT_TIMEOUT     = 16060,
        E_SS_WORKER_ABORT           = 16061,
        E_SS_FAILED                 = 16062,
        E_SS_SPILL                  = 16063,
        E_SS_VALIDATE               = 16064,
        E_SS_BAD_RESPONSE           = 16065,
    }
}

// -----------------------------------------------------------------------------
// Transactions (17000-17999) - Transactions
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Transactions, TRANSACTION_CODES => {
        E_TRAN_DATASTORE_NOT_SUPPORTED      = 17001,
        E_TRAN_STATEMENT_NOT_SUPPORTED      = 17002,
        E_TRAN_FUNCTION_NOT_SUPPORTED       = 17003,
        E_TRANSACTION_CONTEXT               = 17004,
        E_TRAN_STATEMENT_OUT_OF_ORDER       = 17005,
        E_START_TRANSACTION                 = 17006,
        E_COMMIT_TRANSACTION                = 17007,
        E_ROLLBACK_TRANSACTION              = 17008,
        E_NO_SAVEPOINT                      = 17009,
        E_TRANSACTION_EXPIRED               = 17010,
        E_TRANSACTION_RELEASED              = 17011,
        E_DUPLICATE_KEY                     = 17012,
        E_TRANSACTION_INUSE                 = 17013,
        E_KEY_NOT_FOUND                     = 17014,
        E_SCAS_MISMATCH                     = 17015,
        E_TRANSACTION_MEMORY_QUOTA_EXCEEDED = 17016,
        E_TRANSACTION_FETCH                 = 17017,
        E_POST_COMMIT_TRANSACTION           = 17018,
        E_AMBIGUOUS_COMMIT_TRANSACTION      = 17019,
        E_TRANSACTION_STAGING               = 17020,
        E_TRANSACTION_QUEUE_FULL            = 17021,
        W_POST_COMMIT_TRANSACTION           = 17022,
        E_TRANSACTION_XATTRS                = 17023,
        E_GC_AGENT                          = 17096,
        E_TRAN_CE_NOTSUPPORTED              = 17097,
        E_MEMORY_ALLOCATION                 = 17098,
        E_TRANSACTION                       = 17099,
    }
}

// -----------------------------------------------------------------------------
// Dictionary (18000-18999) - Statistics dictionary
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Dictionary, DICTIONARY_CODES => {
        E_DICT_INTERNAL          = 18010,
        E_INVALID_GSI_INDEXER    = 18020,
        E_INVALID_GSI_INDEX      = 18030,
        E_SYSTEM_COLLECTION      = 18040,
        E_DICTIONARY_ENCODING    = 18050,
        E_DICT_KEYSPACE_MISMATCH = 18060,
        E_DICT_MISSING_FIELD     = 18070,
    }
}

// -----------------------------------------------------------------------------
// Virtual keyspaces (19000-19099) - Virtual keyspaces
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Virtual, VIRTUAL_CODES => {
        E_VIRTUAL_KS_NOT_SUPPORTED         = 19000,
        E_VIRTUAL_KS_NOT_IMPLEMENTED       = 19001,
        E_VIRTUAL_KS_IDXER_NOT_FOUND       = 19002,
        E_VIRTUAL_IDX_NOT_FOUND            = 19003,
        E_VIRTUAL_IDXER_NOT_SUPPORTED      = 19004,
        E_VIRTUAL_IDX_NOT_IMPLEMENTED      = 19005,
        E_VIRTUAL_IDX_NOT_SUPPORTED        = 19006,
        E_VIRTUAL_SCOPE_NOT_FOUND          = 19007,
        E_VIRTUAL_BUCKET_CREATE_SCOPE      = 19009,
        E_VIRTUAL_BUCKET_DROP_SCOPE        = 19010,
        E_VIRTUAL_KEYSPACE_NOT_FOUND       = 19011,
        E_VIRTUAL_BUCKET_CREATE_COLLECTION = 19012,
        E_VIRTUAL_BUCKET_DROP_COLLECTION   = 19013,
    }
}

// -----------------------------------------------------------------------------
// Sequences (19100-19199) - Sequences
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Sequences, SEQUENCE_CODES => {
        E_SEQUENCE_NOT_ENABLED    = 19100,
        E_SEQUENCE_CREATE         = 19101,
        E_SEQUENCE_ALTER          = 19102,
        E_SEQUENCE_DROP           = 19103,
        E_SEQUENCE_INVALID_RANGE  = 19104,
        E_SEQUENCE_INVALID_CACHE  = 19105,
        E_SEQUENCE_NOT_FOUND      = 19106,
        E_SEQUENCE                = 19107,
        E_SEQUENCE_ALREADY_EXISTS = 19108,
        E_SEQUENCE_METAKV         = 19109,
        E_SEQUENCE_INVALID_DATA   = 19110,
        E_SEQUENCE_EXHAUSTED      = 19111,
        E_SEQUENCE_CYCLE          = 19112,
        E_SEQUENCE_INVALID_NAME   = 19113,
        E_SEQUENCE_READ_ONLY_REQ  = 19114,
        W_SEQUENCE_CACHE_SIZE     = 19115,
        E_SEQUENCE_NAME_PARTS     = 19116,
        E_SEQUENCE_DROP_ALL       = 19117,
        W_SEQUENCE_NO_PREV_VALUE  = 19118,
    }
}

// -----------------------------------------------------------------------------
// Natural language (19200-19999) - Natural language requests
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::NaturalLanguage, NATURAL_LANGUAGE_CODES => {
        E_NL_CREATE_SESSIONS_REQ              = 19200,
        E_NL_SEND_SESSIONS_REQ                = 19201,
        E_NL_SESSIONS_AUTH                    = 19202,
        E_NL_SESSIONS_RESP_READ               = 19203,
        E_NL_SESSIONS_RESP_UNMARSHAL          = 19204,
        E_NL_SESSIONS_PARSE_EXPIRE_TIME       = 19205,
        E_NL_PROMPT_SCHEMA_MARSHAL            = 19206,
        E_NL_CHATCOMPLETIONS_PROMPT_MARSHAL   = 19207,
        E_NL_SEND_CHATCOMPLETIONS_REQ         = 19208,
        E_NL_CHATCOMPLETIONS_REQ_FAILED       = 19209,
        E_NL_CHATCOMPLETIONS_READ_RESP_STREAM = 19210,
        E_NL_CHATCOMPLETIONS_RESP_UNMARSHAL   = 19211,
        E_NL_ERR_CHATCOMPLETIONS_RESP         = 19212,
        E_NL_MISSING_NL_PARAM                 = 19213,
        E_NL_FAIL_GENERATED_STMT              = 19214,
        E_NL_CONTEXT                          = 19215,
        E_NL_PROMPT_INFER                     = 19216,
        E_NL_ORG_NOT_FOUND                    = 19217,
        E_NL_ORG_UNAUTH                       = 19218,
        E_NL_CREATE_CHATCOMPLETIONS_REQ       = 19219,
        E_NL_TOO_MANY_WAITERS                 = 19220,
        E_NL_TIMEOUT                          = 19221,
        E_NL_REQ_FEAT_DISABLED                = 19222,
        E_NL_TOO_MANY_KEYSPACES               = 19223,
    }
}

// -----------------------------------------------------------------------------
// Auto update statistics (20000-20999) - Auto update statistics
// -----------------------------------------------------------------------------
define_error_codes! {
    Subsystem::Aus, AUS_CODES => {
        E_AUS_NOT_SUPPORTED           = 20000,
        E_AUS_NOT_INITIALIZED         = 20001,
        E_AUS_STORAGE                 = 20002,
        E_AUS_INVALID_DOCUMENT_SCHEMA = 20003,
        E_AUS_SETTINGS_ENCODING       = 20004,
        E_AUS_STORAGE_INVALID_KEY     = 20005,
        E_AUS_SCHEDULING              = 20006,
        E_AUS_TASK                    = 20007,
        E_AUS_EVALUATION_PHASE        = 20008,
        E_AUS_UPDATE_PHASE            = 20009,
        E_AUS_TASK_NOT_STARTED        = 20010,
        E_AUS_TASK_TIMEOUT            = 20011,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn codes_are_never_assigned_twice() {
        let mut seen: HashMap<i32, &str> = HashMap::new();
        for group in ALL_CODES {
            for (name, code) in group.iter() {
                if let Some(previous) = seen.insert(code.value(), *name) {
                    panic!("{} reuses code {} already assigned to {}", name, code, previous);
                }
            }
        }
        assert!(seen.len() > 500);
    }

    #[test]
    fn every_code_sits_in_its_subsystem_range() {
        for group in ALL_CODES {
            let Some((_, first)) = group.first() else { continue };
            let subsystem = first.subsystem().expect("first code has a subsystem");
            for (name, code) in group.iter() {
                assert_eq!(code.subsystem(), Some(subsystem), "{} drifted out of range", name);
            }
        }
    }

    #[test]
    fn registry_names_match_constants() {
        assert!(EXECUTION_CODES.contains(&("E_INTERNAL", E_INTERNAL)));
        assert!(AUS_CODES.contains(&("E_AUS_STORAGE", E_AUS_STORAGE)));
        assert_eq!(E_CB_DML.value(), 12009);
        assert_eq!(W_GENERIC.subsystem(), Some(Subsystem::Plan));
    }
}
