//! Built-in catalog entries.
//!
//! The table below seeds [`Catalog::standard`](crate::Catalog::standard):
//! one entry for every code declared in [`definitions`](crate::definitions).
//! Entries without an explicit user classification are system errors.

use crate::definitions::*;
use crate::{ErrorCode, UserClassification};

pub(crate) const SERVER: &str = "Server";
pub(crate) const CBQ_SHELL: &str = "cbq-shell";
pub(crate) const COMMUNITY_EDITION: &str = "Community Edition";
pub(crate) const INFER_TOOL: &str = "Infer tool";

/// Compile-time description of one catalog entry.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntrySeed {
    pub(crate) code: ErrorCode,
    pub(crate) symbol: &'static str,
    pub(crate) description: &'static str,
    pub(crate) reasons: &'static [&'static str],
    pub(crate) actions: &'static [&'static str],
    pub(crate) applies_to: &'static [&'static str],
    pub(crate) user: UserClassification,
    pub(crate) warning: bool,
}

pub(crate) static STANDARD_ENTRIES: &[EntrySeed] = &[
    EntrySeed {
        code: E_SHELL_CONNECTION_REFUSED,
        symbol: "E_SHELL_CONNECTION_REFUSED",
        description: "A connection was refused.",
        reasons: &[
            "A connection the cbq-shell was trying to make was refused by the remote partner.",
        ],
        actions: &["Verify the connection URL and try again."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_UNSUPPORTED_PROTOCOL,
        symbol: "E_SHELL_UNSUPPORTED_PROTOCOL",
        description: "Unsupported protocol scheme «scheme»",
        reasons: &[
            "The protocol scheme in the cbq-shell connection URL is not supported.",
        ],
        actions: &[
            "Correct the URL ensuring only a supported scheme is used.\nSchemes: http, https, couchbase, couchbases",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_SUCH_HOST,
        symbol: "E_SHELL_NO_SUCH_HOST",
        description: "No such host «host»",
        reasons: &["The noted host could not be found by the cbq-shell."],
        actions: &["Correct the host in the connection URL and try again."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_HOST_IN_REQUEST_URL,
        symbol: "E_SHELL_NO_HOST_IN_REQUEST_URL",
        description: "No host in request URL",
        reasons: &[
            "The cbq-shell connection URL does not contain a host name or IP address.",
        ],
        actions: &["Correct the the connection URL and try again."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_UNKNOWN_PORT_TCP,
        symbol: "E_SHELL_UNKNOWN_PORT_TCP",
        description: "Unknown port «port»",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_ROUTE_TO_HOST,
        symbol: "E_SHELL_NO_ROUTE_TO_HOST",
        description: "No route to host",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_UNREACHABLE_NETWORK,
        symbol: "E_SHELL_UNREACHABLE_NETWORK",
        description: "Network is unreachable.",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_CONNECTION,
        symbol: "E_SHELL_NO_CONNECTION",
        description: "Not connected to any cluster. Use \\CONNECT command.",
        reasons: &[
            "A connection in the cbq-shell has not been attempted or has failed.",
        ],
        actions: &["Issue the connect command to connect to a server."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_SHELL_DRIVER_OPEN,
        symbol: "E_SHELL_DRIVER_OPEN",
        description: "Failed to open a connection to the server endpoint.",
        reasons: &[],
        actions: &[
            "Review the details of the error reported.",
            "Contact support.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_URL,
        symbol: "E_SHELL_INVALID_URL",
        description: "Invalid input URL «url»",
        reasons: &[
            "The URL could not be properly parsed.",
            "The URL contains an invalid host.",
            "The URL contains an invalid port.",
            "A port number was specified with couchbase:// or couchbases:// protocol scheme in the URL.",
        ],
        actions: &["Correct the URL and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_READ_FILE,
        symbol: "E_SHELL_READ_FILE",
        description: "Error during file read «details»",
        reasons: &[
            "The cbq-shell input commands file could not be read.",
            "The cbq-shell command history file could not be read.",
        ],
        actions: &["Review the details reported and take corrective action."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_WRITE_FILE,
        symbol: "E_SHELL_WRITE_FILE",
        description: "Error during file write «details»",
        reasons: &["The cbq-shell command history file could not be written to."],
        actions: &["Review the details reported and take corrective action."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_OPEN_FILE,
        symbol: "E_SHELL_OPEN_FILE",
        description: "Unable to open file «file»",
        reasons: &[
            "The cbq-shell input commands file could not be opened.",
            "The size of the cbq-shell input stream could not be determined.",
            "The the cbq-shell input stream was empty.",
            "The cbq-shell command history file could not be opened.",
        ],
        actions: &["Review the details reported and take corrective action."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_CLOSE_FILE,
        symbol: "E_SHELL_CLOSE_FILE",
        description: "Unable to close file «file»",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_PASSWORD,
        symbol: "E_SHELL_INVALID_PASSWORD",
        description: "Invalid password",
        reasons: &[
            "An empty password was entered at the cbq-shell password prompt.",
            "A password entered at the cbq-shell prompt contains invalid characters.",
            "An error occurred reading from the terminal for the cbq-shell password prompt.",
        ],
        actions: &[
            "Enter only a valid password at the prompt.",
            "review the details reported and take corrective action.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_USERNAME,
        symbol: "E_SHELL_INVALID_USERNAME",
        description: "Invalid username. ",
        reasons: &[
            "The cbq-shell command line flags include the password but not the user name.",
        ],
        actions: &["Pass both user and password on the cbq-shell command line."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_MISSING_CREDENTIAL,
        symbol: "E_SHELL_MISSING_CREDENTIAL",
        description: "Username missing in -credentials/-c option.",
        reasons: &[
            "The username could not be found in the credentials cbq-shell option value.",
        ],
        actions: &["Correct the value and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_CREDENTIAL,
        symbol: "E_SHELL_INVALID_CREDENTIAL",
        description: "Invalid format for credentials. Separate username and password with a colon (':').",
        reasons: &[
            "The credentials cbq-shell option value was not in the correct format.",
        ],
        actions: &["Correct the value and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_SUCH_COMMAND,
        symbol: "E_SHELL_NO_SUCH_COMMAND",
        description: "Command does not exist.",
        reasons: &[
            "The command entered at the cbq-shell prompt was invalid.",
            "The cbq-shell help command could not find the command specified.",
        ],
        actions: &["Correct the command and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_SUCH_PARAM,
        symbol: "E_SHELL_NO_SUCH_PARAM",
        description: "Parameter does not exist",
        reasons: &[
            "An attempt was made access a parameter that doesn't exist via cbq-shell commands.",
        ],
        actions: &[
            "Verify the parameter is correctly named and the sequence of commands means it is defined when expected.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_TOO_MANY_ARGS,
        symbol: "E_SHELL_TOO_MANY_ARGS",
        description: "Too many input arguments to command.",
        reasons: &[
            "A cbq-shell command was attempted but too many arguments were supplied.",
        ],
        actions: &[
            "Consult the command help facility, correct the command and retry.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_TOO_FEW_ARGS,
        symbol: "E_SHELL_TOO_FEW_ARGS",
        description: "Too few input arguments to command.",
        reasons: &[
            "A cbq-shell command was attempted with insufficient arguments.",
        ],
        actions: &[
            "Consult the command help facility, correct the command and retry.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_STACK_EMPTY,
        symbol: "E_SHELL_STACK_EMPTY",
        description: "Stack empty.",
        reasons: &[
            "The cbq-shell value stack was empty and an attempt to pop or set a value was attempted.",
        ],
        actions: &["Contact support."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_NO_SUCH_ALIAS,
        symbol: "E_SHELL_NO_SUCH_ALIAS",
        description: "Alias does not exist «alias»",
        reasons: &[
            "An attempt was made to list cbq-shell command aliases and no aliases exist.",
        ],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_BATCH_MODE,
        symbol: "E_SHELL_BATCH_MODE",
        description: "Error when running in batch mode for Analytics. Incorrect input value",
        reasons: &[
            "The cbq-shell batch command line option was set to an invalid value.",
        ],
        actions: &["Correct the command line option and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_STRING_WRITE,
        symbol: "E_SHELL_STRING_WRITE",
        description: "Cannot write to string buffer.",
        reasons: &[
            "Operating in batch mode, cbq-shell failed to write the command to the batch file.",
        ],
        actions: &["Review the details reported and take corrective action."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_OPERATION_TIMEOUT,
        symbol: "E_SHELL_OPERATION_TIMEOUT",
        description: "Operation timed out. Check query service url",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_ROWS_SCAN,
        symbol: "E_SHELL_ROWS_SCAN",
        description: "Retired.",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_JSON_MARSHAL,
        symbol: "E_SHELL_JSON_MARSHAL",
        description: "An error occurred writing data in JSON format.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_JSON_UNMARSHAL,
        symbol: "E_SHELL_JSON_UNMARSHAL",
        description: "An error occurred reading data in JSON format.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_DRIVER_QUERY_METHOD,
        symbol: "E_SHELL_DRIVER_QUERY_METHOD",
        description: "An error occurred in the Query driver.",
        reasons: &[],
        actions: &[
            "Review the reported error.",
            "Contact support.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_WRITER_OUTPUT,
        symbol: "E_SHELL_WRITER_OUTPUT",
        description: "Error with io Writer.",
        reasons: &[
            "The cbq-shell was trying to write output and encountered an error.",
        ],
        actions: &["Review the details reported and take corrective action."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_UNBALANCED_QUOTES,
        symbol: "E_SHELL_UNBALANCED_QUOTES",
        description: "Unbalanced quotes in the input.",
        reasons: &[
            "The cbq-shell echo contained an unequal number of double quotation marks.",
        ],
        actions: &["Correct the command and retry."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_ROWS_CLOSE,
        symbol: "E_SHELL_ROWS_CLOSE",
        description: "Retired.",
        reasons: &[],
        actions: &[],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_CMD_LINE_ARGS,
        symbol: "E_SHELL_CMD_LINE_ARGS",
        description: "Place input argument URL at the end, after input flags.",
        reasons: &[
            "The cbq-shell connection URL was not passed as the engine argument and was not the last argument.",
        ],
        actions: &[
            "Pass the connection URL using the engine argument flag or as the final argument on the command line.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_INPUT_ARGUMENTS,
        symbol: "E_SHELL_INVALID_INPUT_ARGUMENTS",
        description: "Input Argument format is invalid.",
        reasons: &[
            "The argument to a cbq-shell command was not a supported format.",
            "The value specified for a cbq-shell predefined value was not valid.",
        ],
        actions: &["Correct the argument or value type."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_ON_REFRESH,
        symbol: "E_SHELL_ON_REFRESH",
        description: "Query APIs cannot be initialized from Cluster Map.",
        reasons: &[
            "The cbq-shell failed to obtain the cluster map from the server.",
        ],
        actions: &["Review the connection URL is correct and still valid."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_ARGUMENT,
        symbol: "E_SHELL_INVALID_ARGUMENT",
        description: "Invalid argument.",
        reasons: &[
            "An invalid argument was supplied to the cbq-shell redirect command.",
        ],
        actions: &[
            "Consult the command help facility, correct the command and retry.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INIT_FAILURE,
        symbol: "E_SHELL_INIT_FAILURE",
        description: "Terminal set-up failed (check not legacy console)",
        reasons: &[
            "cbq-shell failed to initialise the terminal for vi emulation mode.",
        ],
        actions: &[
            "(Windows) Ensure cbq-shell is not being run in a legacy console window.",
            "Don't use cbq-shell's vi emulation mode.",
        ],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_INVALID_PROTOCOL,
        symbol: "E_SHELL_INVALID_PROTOCOL",
        description: "Invalid protocol. Mixed protocols are not permitted in engine list.",
        reasons: &[
            "Multiple endpoints were listed in the cbq-shell connection URL with differing protocols.",
        ],
        actions: &["Ensure all endpoints listed are using the same protocol."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SHELL_UNKNOWN,
        symbol: "E_SHELL_UNKNOWN",
        description: "A non-specific error occurred in the cbq-shell.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[CBQ_SHELL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_READONLY,
        symbol: "E_SERVICE_READONLY",
        description: "The server or request is read-only and cannot accept this write statement.",
        reasons: &[
            "A request was submitted using the GET method and attempted a statement that modifies data.",
            "A request was received with the ˝readonly˝ parameter set to true and attempted a statement that modifies data.",
            "A PREPARE statement preparing a statement that modifies data was received and the ˝auto_execute˝ was set to true.",
        ],
        actions: &[
            "Use POST to submit write statements and ensure the ˝readonly˝ request parameter is not set or is set to false.",
            "Ensure ˝auto_execute˝ is false when ˝readonly˝ is true (or when using the GET method) and preparing statements that modify data.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_HTTP_UNSUPPORTED_METHOD,
        symbol: "E_SERVICE_HTTP_UNSUPPORTED_METHOD",
        description: "Unsupported http method:«METHOD»",
        reasons: &[
            "The service endpoint supports only GET & POST HTTP methods.\nAll other HTTP methods are not supported.",
        ],
        actions: &["Use a supported method to submit requests."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_NOT_IMPLEMENTED,
        symbol: "E_SERVICE_NOT_IMPLEMENTED",
        description: "«feature» «value» not implemented",
        reasons: &[
            "The noted feature and value combination is reserved but is not implemented.",
        ],
        actions: &["Use only supported feature and value combinations."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_UNRECOGNIZED_VALUE,
        symbol: "E_SERVICE_UNRECOGNIZED_VALUE",
        description: "Unknown «parameter» value: «value»",
        reasons: &["The value supplied for the noted parameter is unknown."],
        actions: &[
            "Ensure the value supplied is a supported value in the required format for the request parameter noted.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_BAD_VALUE,
        symbol: "E_SERVICE_BAD_VALUE",
        description: "Error processing «message»",
        reasons: &[
            "There was an error in processing as detailed in the message.\ne.g. a non-numeric string value passed as the value for a request parameter that is expected to be numeric.",
        ],
        actions: &[
            "Where the error is derived from user controlled data, correct the data.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_MISSING_VALUE,
        symbol: "E_SERVICE_MISSING_VALUE",
        description: "No «parameter» value",
        reasons: &["A value was not supplied for the required parameter."],
        actions: &[
            "Provide valid values for all required parameters.\ne.g. ensure a user and password are supplied for all requests and a scan_vector is supplied for requests using AT_PLUS consistency level.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_MULTIPLE_VALUES,
        symbol: "E_SERVICE_MULTIPLE_VALUES",
        description: "Multiple values for «parameters»",
        reasons: &[
            "Multiple values have been supplied for a parameter or two mutually exclusive parameters are both enabled.",
        ],
        actions: &[
            "Ensure all request parameters including named statement parameters, are unique and supplied only once.",
            "Ensure mutually exclusive parameters are not simultaneously enabled.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_UNRECOGNIZED_PARAMETER,
        symbol: "E_SERVICE_UNRECOGNIZED_PARAMETER",
        description: "Unrecognized parameter in request: «parameter»",
        reasons: &["An unknown request parameter was received."],
        actions: &[
            "Pass only valid request parameters.",
            "Check parameter names for typographical errors.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TYPE_MISMATCH,
        symbol: "E_SERVICE_TYPE_MISMATCH",
        description: "«feature» has to be of type «expected»",
        reasons: &[
            "The value supplied for «feature» was not of the expected type.",
        ],
        actions: &["Correct the value and re-submit the request."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TIMEOUT,
        symbol: "E_SERVICE_TIMEOUT",
        description: "Timeout «duration» exceeded",
        reasons: &["The specified request time-out was reached."],
        actions: &[
            "Check the statement is correctly constructed and using the expected plan.",
            "Revise the time-out upward to accommodate the statement.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_INVALID_VALUE,
        symbol: "E_SERVICE_INVALID_VALUE",
        description: "«parameter» = «value» is invalid. «message»",
        reasons: &[
            "The named parameter's value was invalid for the reason noted in the message.",
        ],
        actions: &["Set the parameter to a valid value for the request."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_INVALID_JSON,
        symbol: "E_SERVICE_INVALID_JSON",
        description: "Invalid JSON in results",
        reasons: &[
            "An error occurred whilst writing results to the output stream.",
        ],
        actions: &["Please contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_CLIENTID,
        symbol: "E_SERVICE_CLIENTID",
        description: "forbidden character (\\\\ or \\\") in client_context_id",
        reasons: &[
            "The request parameter client_context_id contains one or more of the noted invalid characters.",
        ],
        actions: &["Revise the value for client_context_id."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_MEDIA_TYPE,
        symbol: "E_SERVICE_MEDIA_TYPE",
        description: "Unsupported media type: «mediaType»",
        reasons: &[
            "The HTTP request header field ˝Accept˝ was not set to a supported value.",
        ],
        actions: &[
            "Change the header field to ˝*/*˝, ˝application/json˝ or ˝application/xml˝.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_HTTP_REQ,
        symbol: "E_SERVICE_HTTP_REQ",
        description: "Request «id» is not a http request",
        reasons: &["The request identified by «id» does not exist."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SCAN_VECTOR_BAD_LENGTH,
        symbol: "E_SERVICE_SCAN_VECTOR_BAD_LENGTH",
        description: "Array «scan_entry» should be of length 2",
        reasons: &["An invalid scan vector array element was found."],
        actions: &["Correct the scan vector."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SCAN_VECTOR_BAD_SEQUENCE_NUMBER,
        symbol: "E_SERVICE_SCAN_VECTOR_BAD_SEQUENCE_NUMBER",
        description: "Bad sequence number «seqno». Expected an unsigned 64-bit integer.",
        reasons: &[
            "An entry in the scan vector contained a sequence number that was not an unsigned 64-bit integer.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SCAN_VECTOR_BADUUID,
        symbol: "E_SERVICE_SCAN_VECTOR_BADUUID",
        description: "Bad UUID «vbucket_uuid». Expected a string.",
        reasons: &[
            "An entry in the scan vector contained a v-bucket UUID that was not a string value.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_DECODE_NIL,
        symbol: "E_SERVICE_DECODE_NIL",
        description: "Failed to decode nil value.",
        reasons: &["A request requiring a body did not include one."],
        actions: &["Resubmit a valid request."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_HTTP_METHOD,
        symbol: "E_SERVICE_HTTP_METHOD",
        description: "Unsupported method «method»",
        reasons: &[
            "The HTTP request method noted is not supported by the endpoint.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SHUTTING_DOWN,
        symbol: "E_SERVICE_SHUTTING_DOWN",
        description: "Indicates the service on the node is in the process of shutting down.",
        reasons: &["A topology change was in the process of removing the node."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SHUT_DOWN,
        symbol: "E_SERVICE_SHUT_DOWN",
        description: "Indicates the service on the node has been shut down and is waiting to be terminated.",
        reasons: &["A topology change was in the process of removing the node."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_UNAVAILABLE,
        symbol: "E_SERVICE_UNAVAILABLE",
        description: "Service cannot handle requests",
        reasons: &["A ping request has determined the service was not healthy."],
        actions: &[
            "Examine the diagnostic logs to ascertain the reason for this state.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_USER_REQUEST_EXCEEDED,
        symbol: "E_SERVICE_USER_REQUEST_EXCEEDED",
        description: "User has more requests running than allowed",
        reasons: &["Currently unused."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_USER_REQUEST_RATE_EXCEEDED,
        symbol: "E_SERVICE_USER_REQUEST_RATE_EXCEEDED",
        description: "User has exceeded request rate limit",
        reasons: &["Currently unused."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_USER_REQUEST_SIZE_EXCEEDED,
        symbol: "E_SERVICE_USER_REQUEST_SIZE_EXCEEDED",
        description: "User has exceeded input network traffic limit",
        reasons: &["Currently unused."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_USER_RESULT_SIZE_EXCEEDED,
        symbol: "E_SERVICE_USER_RESULT_SIZE_EXCEEDED",
        description: "User has exceeded results size limit",
        reasons: &["Currently unused."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_REQUEST_ERROR_LIMIT,
        symbol: "E_REQUEST_ERROR_LIMIT",
        description: "Request execution aborted as the number of errors raised has reached the maximum permitted.",
        reasons: &["The number of errors raised has reached the limit."],
        actions: &[
            "Consult the errors to ensure the statement is operating as expected.",
            "Revise the ˝error_limit˝ request parameter as necessary.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TENANT_THROTTLED,
        symbol: "E_SERVICE_TENANT_THROTTLED",
        description: "Request has been declined with «reason»",
        reasons: &["The request breached a limit for the tenant."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TENANT_MISSING,
        symbol: "E_SERVICE_TENANT_MISSING",
        description: "Request does not have a valid tenant",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TENANT_NOT_AUTHORIZED,
        symbol: "E_SERVICE_TENANT_NOT_AUTHORIZED",
        description: "Request is not authorized for tenant «tenant»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TENANT_REJECTED,
        symbol: "E_SERVICE_TENANT_REJECTED",
        description: "Request rejected due to limiting or throttling. «retry»",
        reasons: &[],
        actions: &["Retry the request in accordance with «retry»."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_TENANT_NOT_FOUND,
        symbol: "E_SERVICE_TENANT_NOT_FOUND",
        description: "Tenant not found «tenant»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_REQUEST_QUEUE_FULL,
        symbol: "E_SERVICE_REQUEST_QUEUE_FULL",
        description: "Request queue full",
        reasons: &["The request queue has reached its limit"],
        actions: &["Verify the server is processing requests."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_NO_CLIENT,
        symbol: "E_SERVICE_NO_CLIENT",
        description: "Client disconnected",
        reasons: &[
            "The server aborts servicing a request when it detects the client has closed its connection.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SERVICE_SLOW_CLIENT,
        symbol: "E_SERVICE_SLOW_CLIENT",
        description: "Slow/stalled client write timed out",
        reasons: &[
            "A write to the request output stream timed out.  Individual writes that make up the response must not block indefinitely, which typically occurs when the client isn't reading the response stream.",
        ],
        actions: &[
            "Check the application is reading response stream fast enough to avoid blocking writes.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_CONNECTION,
        symbol: "E_ADMIN_CONNECTION",
        description: "Error connecting to «what»",
        reasons: &[
            "The server encountered an error when establishing a connection to «what».",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_START,
        symbol: "E_ADMIN_START",
        description: "Error accounting manager: «reason».",
        reasons: &[
            "«reason» prevented correct start-up of the service statistics monitor.",
        ],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_INVALIDURL,
        symbol: "E_ADMIN_INVALIDURL",
        description: "Invalid «component» URL: «URL»",
        reasons: &["An invalid URL was encountered for the noted component."],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_DECODING,
        symbol: "E_ADMIN_DECODING",
        description: "Error in JSON decoding",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_ENCODING,
        symbol: "E_ADMIN_ENCODING",
        description: "Error in JSON encoding",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_UNKNOWN_SETTING,
        symbol: "E_ADMIN_UNKNOWN_SETTING",
        description: "Unknown setting: «setting»",
        reasons: &[
            "An unknown setting was supplied in a request to the settings rest endpoint.",
        ],
        actions: &["Provide only valid settings in the request."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_SETTING_TYPE,
        symbol: "E_ADMIN_SETTING_TYPE",
        description: "Incorrect value «value» for setting: «name»",
        reasons: &[
            "The value provided for the noted setting was not of the correct type.",
        ],
        actions: &["Correct the value and re-submit the request."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_GET_CLUSTER,
        symbol: "E_ADMIN_GET_CLUSTER",
        description: "Error retrieving cluster «message»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_ADD_CLUSTER,
        symbol: "E_ADMIN_ADD_CLUSTER",
        description: "Error adding cluster «message»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_REMOVE_CLUSTER,
        symbol: "E_ADMIN_REMOVE_CLUSTER",
        description: "Error removing cluster «message»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_GET_NODE,
        symbol: "E_ADMIN_GET_NODE",
        description: "Error retrieving node «message»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_NO_NODE,
        symbol: "E_ADMIN_NO_NODE",
        description: "No such node «message»",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_ADD_NODE,
        symbol: "E_ADMIN_ADD_NODE",
        description: "Error adding node «message»",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_REMOVE_NODE,
        symbol: "E_ADMIN_REMOVE_NODE",
        description: "Error removing node «message»",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_MAKE_METRIC,
        symbol: "E_ADMIN_MAKE_METRIC",
        description: "Error creating metric «message»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_AUTH,
        symbol: "E_ADMIN_AUTH",
        description: "Error authorizing against cluster «message»",
        reasons: &[
            "Request received without suitable credentials.",
            "Failure to authenticate with given credentials.",
            "Authenticated user lacks required privileges.",
        ],
        actions: &[
            "Review the embedded «message» information for more detail on why the operation failed.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_ENDPOINT,
        symbol: "E_ADMIN_ENDPOINT",
        description: "The admin endpoint encountered an error.",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_SSL_NOT_ENABLED,
        symbol: "E_ADMIN_SSL_NOT_ENABLED",
        description: "server is not ssl enabled",
        reasons: &[
            "An attempt has been made to update the SSL certificate but the server does not have SSL enabled.",
        ],
        actions: &["Review the server configuration."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_CREDS,
        symbol: "E_ADMIN_CREDS",
        description: "Not a proper creds JSON array of user/pass structures: «creds»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_QUALIFIER_EXISTS,
        symbol: "E_COMPLETED_QUALIFIER_EXISTS",
        description: "Completed requests qualifier already set: «qualifier»",
        reasons: &[],
        actions: &[
            "Define a different qualifier or update the existing one.",
            "Refer to the ˝logging qualifiers section of the documentation.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_QUALIFIER_UNKNOWN,
        symbol: "E_COMPLETED_QUALIFIER_UNKNOWN",
        description: "Completed requests qualifier unknown: «qualifier»",
        reasons: &["An attempt was made to add a qualifier that is not a known."],
        actions: &[
            "Check the qualifier specified is valid.",
            "Refer to the ˝logging qualifiers section of the documentation.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_QUALIFIER_NOT_FOUND,
        symbol: "E_COMPLETED_QUALIFIER_NOT_FOUND",
        description: "Completed requests qualifier not set: «qualifier»",
        reasons: &["An attempt was made to access a qualifier that was not set."],
        actions: &["Ensure the intended qualifier has been set."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_QUALIFIER_NOT_UNIQUE,
        symbol: "E_COMPLETED_QUALIFIER_NOT_UNIQUE",
        description: "Non-unique completed requests qualifier «qualifier» cannot be updated",
        reasons: &["A attempt was made to update a qualifier that isn't unique."],
        actions: &[
            "Only attempt to update unique qualifiers. Non-unique qualifiers may only be added/removed.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_QUALIFIER_INVALID_ARGUMENT,
        symbol: "E_COMPLETED_QUALIFIER_INVALID_ARGUMENT",
        description: "Completed requests qualifier «qualifier» cannot accept argument «value»",
        reasons: &[
            "The data type of the «value» was incompatible with the qualifier.",
        ],
        actions: &[
            "Correct the value for the qualifier and re-submit the request.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_COMPLETED_BAD_MAX_SIZE,
        symbol: "E_COMPLETED_BAD_MAX_SIZE",
        description: "Completed requests maximum plan size («size») is invalid.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_BAD_SERVICE_PORT,
        symbol: "E_ADMIN_BAD_SERVICE_PORT",
        description: "Invalid service port: «port»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_BODY,
        symbol: "E_ADMIN_BODY",
        description: "Error getting request body",
        reasons: &[
            "A prepareds endpoint PUT request was received but the body was empty or could not be read.",
        ],
        actions: &["contact support"],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_FFDC,
        symbol: "E_ADMIN_FFDC",
        description: "FFDC invocation failed.",
        reasons: &[
            "An error occurred with a manual First Failure Data Capture (FFDC) invocation.",
        ],
        actions: &[
            "Wait until the specified reported minimum time before attempting a further invocation.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADMIN_LOG,
        symbol: "E_ADMIN_LOG",
        description: "Error accessing log",
        reasons: &[
            "A request was made to the diagnostic log endpoint and there was a error accessing the file.",
        ],
        actions: &[
            "Ensure the diagnostic log file being accessed exists for the duration of the request.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AWR_START,
        symbol: "E_AWR_START",
        description: "Failed to start workload reporting",
        reasons: &[
            "An error occurred when starting request capture for workload reporting.",
        ],
        actions: &["Review the error and correct any configuration issues."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AWR_SETTING,
        symbol: "E_AWR_SETTING",
        description: "Invalid value «value» for workload setting «setting»",
        reasons: &["The value provided for the setting is invalid."],
        actions: &[
            "Consult the documentation for the valid values for the workload settings. Review the configuration and correct the value.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AWR_CONFIG,
        symbol: "E_AWR_CONFIG",
        description: "Error processing workload configuration",
        reasons: &["The value provided for AWR configuration is invalid."],
        actions: &[
            "Review the configuration and correct the value.",
            "The value must be a valid object or a string encoding a valid JSON object.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AWR_DISTRIB,
        symbol: "E_AWR_DISTRIB",
        description: "Error distributing workload settings",
        reasons: &[
            "An error occurred distributing the workload settings to other Query nodes.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_SYNTAX,
        symbol: "E_PARSE_SYNTAX",
        description: "Indicates a syntax error occurred during statement parsing.",
        reasons: &[],
        actions: &[
            "Correct the syntax and re-submit the request.  Look for incorrectly spelled keywords, use of reserved words as identifiers, incorrect or omitted punctuation and delimiters or invalid grammar.",
            "If using the cbq-shell, the \\syntax command may help with grammar issues.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ERROR_CONTEXT,
        symbol: "E_ERROR_CONTEXT",
        description: "Details the location in the statement text of errors encountered during parsing.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_INVALID_ESCAPE_SEQUENCE,
        symbol: "E_PARSE_INVALID_ESCAPE_SEQUENCE",
        description: "invalid escape sequence",
        reasons: &[
            "An invalid escape sequence was encountered whilst parsing a string value.  Escape sequences are introduced with a backslash (Reverse Solidus, U+005C) and literal backslashes must be escaped.",
        ],
        actions: &[
            "Valid escape sequences are: \\b, \\f, \\n, \\r, \\t, \\/, \\\\, \\\", \\`, \\u#### (where #### is a Unicode symbol number in hexadecimal).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_INVALID_STRING,
        symbol: "E_PARSE_INVALID_STRING",
        description: "invalid string",
        reasons: &[
            "An opening quotation mark defining a string was encountered without any further characters.",
        ],
        actions: &["Correctly delimit all string values in statements."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_MISSING_CLOSING_QUOTE,
        symbol: "E_PARSE_MISSING_CLOSING_QUOTE",
        description: "missing closing quote",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_UNESCAPED_EMBEDDED_QUOTE,
        symbol: "E_PARSE_UNESCAPED_EMBEDDED_QUOTE",
        description: "unescaped embedded quote",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AMBIGUOUS_REFERENCE,
        symbol: "E_AMBIGUOUS_REFERENCE",
        description: "Ambiguous reference to field «field»",
        reasons: &[
            "A field reference in the statement was not fully qualified and there were multiple keyspaces it could have referred to.\ne.g. SELECT a FROM b, c WHERE ...",
        ],
        actions: &[
            "Fully qualify references when the potential for ambiguity exists.\ne.g. SELECT b.a FROM b,c WHERE ... ",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_VARIABLE,
        symbol: "E_DUPLICATE_VARIABLE",
        description: "Duplicate variable: «identifier» already in the scope «context»",
        reasons: &[
            "There was a non-unique binding name in a LET or WITH clause.",
        ],
        actions: &["Use unique names for all bindings in a statement."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_FORMALIZER_INTERNAL,
        symbol: "E_FORMALIZER_INTERNAL",
        description: "Formalizer internal error: «details»",
        reasons: &[
            "A statement included a correlated reference that was not permitted.",
        ],
        actions: &[
            "If encountered with a existing prepared statement, re-prepare the statement.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PARSE_INVALID_INPUT,
        symbol: "E_PARSE_INVALID_INPUT",
        description: "Invalid input.",
        reasons: &[
            "Invalid input was submitted, either a statement or expression, depending on context.",
        ],
        actions: &["Submit only valid SQL++ statements or expressions."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEMANTICS,
        symbol: "E_SEMANTICS",
        description: "A semantic error is present in the statement.",
        reasons: &[
            "The statement includes portions that violate semantic constraints.",
        ],
        actions: &[
            "The cause will contain more detail on the violation; revise the statement and re-submit.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEMANTICS_INTERNAL,
        symbol: "E_SEMANTICS_INTERNAL",
        description: "Semantic error: «what»",
        reasons: &[
            "An internal error occurred during semantics check for the query.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_JOIN_NEST_NO_JOIN_HINT,
        symbol: "E_JOIN_NEST_NO_JOIN_HINT",
        description: "«op» on «alias» cannot have join hint (USE HASH or USE NL)",
        reasons: &[
            "Join type hints are only supported for ANSI join and nest operations.",
        ],
        actions: &[
            "Review the statement and revise the operation or omit the hints.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_JOIN_NEST_NO_USE_KEYS,
        symbol: "E_JOIN_NEST_NO_USE_KEYS",
        description: "«operation» on «alias» cannot have USE KEYS.",
        reasons: &["USE KEYS is not supported in this context."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_JOIN_NEST_NO_USE_INDEX,
        symbol: "E_JOIN_NEST_NO_USE_INDEX",
        description: "«operation» on «alias» cannot have USE INDEX.",
        reasons: &["USE INDEX is not supported in this context."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_INSERT_NO_KEY,
        symbol: "E_MERGE_INSERT_NO_KEY",
        description: "MERGE with ON KEY clause cannot have document key specification in INSERT action.",
        reasons: &[
            "A lookup merge statement specified a document key.\ne.g. MERGE INTO default USING [{},{}] AS source ON KEY 'aaa' WHEN NOT MATCHED THEN INSERT ('key',{})",
        ],
        actions: &["Refer to the documentation for lookup merge statements."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_INSERT_MISSING_KEY,
        symbol: "E_MERGE_INSERT_MISSING_KEY",
        description: "MERGE with ON clause must have document key specification in INSERT action",
        reasons: &[
            "An ANSI merge statement did not include the document key specification.\ne.g. MERGE INTO default USING [{},{}] AS source ON default.id IS VALUED WHEN NOT MATCHED THEN INSERT ({})",
        ],
        actions: &["Refer to the documentation for ANSI merge statements."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_MISSING_SOURCE,
        symbol: "E_MERGE_MISSING_SOURCE",
        description: "MERGE is missing source.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_NO_INDEX_HINT,
        symbol: "E_MERGE_NO_INDEX_HINT",
        description: "MERGE with ON KEY clause cannot have USE INDEX hint specified on target.",
        reasons: &[
            "The USE INDEX hint is not supported with lookup merge statement targets.\ne.g. MERGE INTO default USE INDEX (ix) USING [{},{}] AS source ON KEY 'aaa' WHEN NOT MATCHED THEN INSERT ({})",
        ],
        actions: &["Refer to the documentation for lookup merge statements."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_NO_JOIN_HINT,
        symbol: "E_MERGE_NO_JOIN_HINT",
        description: "MERGE with ON KEY clause cannot have join hint specified on source.",
        reasons: &[
            "The USE INDEX hint is not supported with lookup merge statement source.",
        ],
        actions: &["Refer to the documentation for lookup merge statements."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MIXED_JOIN,
        symbol: "E_MIXED_JOIN",
        description: "Cannot mix «op1» on «alias1» with «op2» on «alias2».",
        reasons: &[
            "Mixing ANSI and non-ANSI joins.\ne.g. SELECT * FROM default d1 JOIN default d2 ON d1.id = d2.id JOIN default d3 ON KEYS 'aaa'",
            "Mixing ANSI and non-ANSI NEST statements.",
        ],
        actions: &["Revise the statement to use only one type of operation."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_WINDOW_SEMANTIC,
        symbol: "E_WINDOW_SEMANTIC",
        description: "«name» window function «clause» «reason»",
        reasons: &[
            "A violation of the window function semantic restrictions was present in the statement.",
        ],
        actions: &["Revise the statement to remove the violation."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ENTERPRISE_FEATURE,
        symbol: "E_ENTERPRISE_FEATURE",
        description: "«feature» is an enterprise level feature.",
        reasons: &[
            "An attempt was made to use the noted feature that is only available in the Enterprise Edition of the product.",
        ],
        actions: &[
            "Consult the documentation for the feature you're trying to use.",
        ],
        applies_to: &[COMMUNITY_EDITION],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISE_UNSUPPORTED_STMT,
        symbol: "E_ADVISE_UNSUPPORTED_STMT",
        description: "Advise supports SELECT, MERGE, UPDATE and DELETE statements only.",
        reasons: &[
            "An attempt was made to run advise on an unsupported statement.",
        ],
        actions: &["Refer to the documentation for ADVISE."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_PROJ_ONLY,
        symbol: "E_ADVISOR_PROJ_ONLY",
        description: "Advisor function is only allowed in projection clause",
        reasons: &[
            "An attempt was made to use the ADVISOR() function out side of a select statement's projection.",
        ],
        actions: &["Refer to the documentation for ADVISE."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_NO_FROM,
        symbol: "E_ADVISOR_NO_FROM",
        description: "FROM clause is not allowed when Advisor function is present in projection clause.",
        reasons: &[
            "An attempt was made to use the advisor function on the results from a keyspace fetch.",
        ],
        actions: &["Refer to the documentation for ADVISE."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MHDP_ONLY_FEATURE,
        symbol: "E_MHDP_ONLY_FEATURE",
        description: "«what» is only supported in Developer Preview Mode.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MISSING_USE_KEYS,
        symbol: "E_MISSING_USE_KEYS",
        description: "«type» term must have USE KEYS",
        reasons: &[
            "A keyspace in the statement was not an explicit path and there was no USE KEYS clause.",
        ],
        actions: &[
            "Revise the statement to include an explicit path or a USE KEYS clause as appropriate.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_HAS_USE_INDEXES,
        symbol: "E_HAS_USE_INDEXES",
        description: "«type» term should not have USE INDEX",
        reasons: &[
            "A keyspace in the statement was not an explicit path and there was a USE INDEX clause.",
        ],
        actions: &[
            "Revise the statement to include an explicit path or remove the USE INDEX clause as appropriate.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_STAT_INVALID_INDEX_TYPE,
        symbol: "E_UPDATE_STAT_INVALID_INDEX_TYPE",
        description: "UPDATE STATISTICS (ANALYZE) supports GSI indexes only for INDEX option.",
        reasons: &[
            "An attempt was made to run UPDATE STATISTICS for a non-GSI index.",
        ],
        actions: &["Do not run UPDATE STATISTICS on a non-GSI index."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_STAT_INDEX_ALL_COLLECTION_ONLY,
        symbol: "E_UPDATE_STAT_INDEX_ALL_COLLECTION_ONLY",
        description: "INDEX ALL option for UPDATE STATISTICS (ANALYZE) can only be used for a collection.",
        reasons: &[
            "A statistics update was attempted using the INDEX ALL clause on a bucket.",
        ],
        actions: &["Do not run UPDATE STATISTICS with INDEX ALL on buckets."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_STAT_SELF_NOTALLOWED,
        symbol: "E_UPDATE_STAT_SELF_NOTALLOWED",
        description: "UPDATE STATISTICS of 'self' is not allowed",
        reasons: &[
            "A statistics update was attempted on an index expression including ˝self˝.",
        ],
        actions: &[
            "Revise the index expression to not include ˝self˝.",
            "Refer to the documentation for UPDATE STATISTICS.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CREATE_INDEX_NOT_INDEXABLE,
        symbol: "E_CREATE_INDEX_NOT_INDEXABLE",
        description: "«index key expression» is not indexable",
        reasons: &[
            "An expression in the index definition was not indexable (e.g. a constant).",
        ],
        actions: &[
            "Revise the definition to include only indexable expressions.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CREATE_INDEX_ATTRIBUTE_MISSING,
        symbol: "E_CREATE_INDEX_ATTRIBUTE_MISSING",
        description: "«message» «location» MISSING attribute not allowed (Only allowed with gsi leading key).",
        reasons: &[
            "An attempt was made to create a GSI index and INCLUDE MISSING was specified for a non-leading key.",
            "An attempt was made to create a non-GSI index and INCLUDE MISSING was specified.",
            "An attempt was made to create an index using FLATTEN_KEYS, and INCLUDE MISSING was specified for an argument other than the initial argument.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CREATE_INDEX_ATTRIBUTE,
        symbol: "E_CREATE_INDEX_ATTRIBUTE",
        description: "Attributes are not allowed on «details» «location» of flatten_keys.",
        reasons: &["Attributes specified for FLATTEN_KEYS."],
        actions: &[
            "Revise the statement to remove the attributes on the FLATTEN_KEYS() expression.",
            "NOTE: Arguments passed to FLATTEN_KEYS() may have attributes.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_FLATTEN_KEYS,
        symbol: "E_FLATTEN_KEYS",
        description: "«flatten keys expression» «location» is not allowed in this context",
        reasons: &[
            "FLATTEN_KEYS specified outside of CREATE INDEX or UPDATE STATISTICS or was surrounded by a function.",
        ],
        actions: &["Refer to the documentation for flatten keys."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ALL_DISTINCT_NOT_ALLOWED,
        symbol: "E_ALL_DISTINCT_NOT_ALLOWED",
        description: "ALL/DISTINCT is not allowed in «expression» «location»",
        reasons: &["ALL and/or DISTINCT used in an invalid location."],
        actions: &["Revise the statement."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CREATE_INDEX_SELF_NOTALLOWED,
        symbol: "E_CREATE_INDEX_SELF_NOTALLOWED",
        description: "Index of «expression» «location» is not allowed as a index key",
        reasons: &["An attempt to use SELF as an index key was made."],
        actions: &["Remove SELF from the the index definition."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_NOT_ALLOWED,
        symbol: "E_INDEX_NOT_ALLOWED",
        description: "PRIMARY INDEX is not allowed using FTS",
        reasons: &[
            "FTS was specified as the index provider for a primary index.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_JOIN_HINT_FIRST_FROM_TERM,
        symbol: "E_JOIN_HINT_FIRST_FROM_TERM",
        description: "Join hint (USE HASH or USE NL) cannot be specified on the first from term «term»",
        reasons: &["A join hint was specified on the first term of a join."],
        actions: &[
            "Revise the statement to remove the hint on the first join term.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ORDER_BY_VALIDATION_FAIL,
        symbol: "E_ORDER_BY_VALIDATION_FAIL",
        description: "«what» «expression» is not a valid constant, named, positional or function parameter.",
        reasons: &[
            "The ORDER BY direction or NULLS position was not a valid constant, named, positional or function parameter.",
        ],
        actions: &[
            "Revise the ORDER BY direction or NULLS position to be a valid constant, named, positional or function parameter.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_RECURSIVE_WITH_SEMANTIC,
        symbol: "E_RECURSIVE_WITH_SEMANTIC",
        description: "recursive_with semantics: «cause»",
        reasons: &[
            "The statement specifies restricted syntax in a recursive common table expression definition.",
        ],
        actions: &["Revise the statement removing the restricted syntax."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ANCHOR_RECURSIVE_REF,
        symbol: "E_ANCHOR_RECURSIVE_REF",
        description: "Anchor Clause cannot have recursive reference in FROM Expression : «alias»",
        reasons: &[
            "The statement includes a recursive common table expression that references itself in the first branch of the defining UNION.\ne.g. WITH RECURSIVE rcte AS (SELECT * FROM rcte UNION SELECT * FROM rcte) SELECT 1",
        ],
        actions: &["Correct the recursive common table expression definition."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MORE_THAN_ONE_RECURSIVE_REF,
        symbol: "E_MORE_THAN_ONE_RECURSIVE_REF",
        description: "Recursive reference «alias» must not appear more than once in the FROM clause",
        reasons: &[
            "The statement includes a recursive common table expression that references itself more than once in the recursive branch of the defining UNION.\ne.g. WITH RECURSIVE rcte AS (SELECT * FROM default UNION SELECT * FROM rcte, rcte) SELECT 1",
        ],
        actions: &["Revise the statement removing the duplicate reference."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CONFIG_INVALID_OPTION,
        symbol: "E_CONFIG_INVALID_OPTION",
        description: "Invalid config option «option»",
        reasons: &[
            "The statement includes a recursive common table expression with an OPTIONS clause object containing an invalid option.\ne.g. WITH RECURSIVE rcte AS (SELECT * FROM default UNION SELECT * FROM rcte) OPTIONS {'bad':1} SELECT 1",
        ],
        actions: &["Refer to the documentation for permitted options."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_RECURSION_UNSUPPORTED,
        symbol: "E_RECURSION_UNSUPPORTED",
        description: "recursive_with_unsupported: «reason»",
        reasons: &[
            "A recursive common table expression was specified in a NEST clause.",
            "A recursive common table expression was specified in an UNNEST clause.",
            "A recursive common table expression was specified in an OUTER JOIN clause.",
        ],
        actions: &["Revise the statement to remove the unsupported reference."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_RECURSIVE_IMPLICIT_DOC_LIMIT,
        symbol: "E_RECURSIVE_IMPLICIT_DOC_LIMIT",
        description: "Recursive WITH «alias» limited to «limit» documents as no explicit document count limit or memory quota set",
        reasons: &[
            "The request without a memory quota set contained a recursive common table expression without an explicit document limit that produced more results than the implicit limit and was stopped.",
        ],
        actions: &[
            "Review the statement and its control of the recursion.\nUse a memory quota to guard against runaway recursion or specify an explicit document limit for the common table expression.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_RECURSIVE_IMPLICIT_DEPTH_LIMIT,
        symbol: "E_RECURSIVE_IMPLICIT_DEPTH_LIMIT",
        description: "Recursive WITH «alias» stopped at «depth» level as no explicit level limit or memory quota set",
        reasons: &[
            "The request without a memory quota set contained a recursive common table expression without an explicit level limit exceeded the implicit limit and was stopped.",
        ],
        actions: &[
            "Review the statement and its control of the recursion.\nUse a memory quota to guard against runaway recursion or specify an explicit level limit for the common table expression.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CYCLE_FIELDS_VALIDATION_FAILED,
        symbol: "E_CYCLE_FIELDS_VALIDATION_FAILED",
        description: "Cycle fields validation failed for with term: «alias»",
        reasons: &[
            "The expression specified in the cycle clause is not an identifier or path term.",
        ],
        actions: &[
            "Revise statement removing or modifying the invalid cycle clause expression.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_SEMANTIC,
        symbol: "E_VECTOR_SEMANTIC",
        description: "Semantic error in query with vector search function: <<msg>>.",
        reasons: &[
            "A vector search function cannot be used together with certain features of a query, e.g. GROUP BY clause or Window function.",
        ],
        actions: &[
            "Revise the statement to remove the offending features of the query.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_INDEX_ATTRIBUTE,
        symbol: "E_VECTOR_INDEX_ATTRIBUTE",
        description: "Invalid index attributes specified for index key <<key>> in CREATE INDEX statement.",
        reasons: &[
            "Cannot mix index attribute VECTOR with <<attr>> for index key <<key>> in CREATE INDEX statement.",
        ],
        actions: &[
            "Revise the statement to remove the offending index attribute.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_INDEX_SINGLE_VECTOR,
        symbol: "E_VECTOR_INDEX_SINGLE_VECTOR",
        description: "Multiple VECTOR index key specified in CREATE INDEX statement for index <<name>>.",
        reasons: &[
            "Only a single index key with VECTOR attribute is supported in CREATE INDEX statement.",
        ],
        actions: &[
            "Revise the statement to include only a single index key with VECTOR attribute.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_INDEX_SINGLE_KEY,
        symbol: "E_VECTOR_INDEX_SINGLE_KEY",
        description: "Multiple index keys specified in CREATE VECTOR INDEX statement for index <<name>>.",
        reasons: &[
            "Only a single index key (with VECTOR attribute) is supported in CREATE VECTOR INDEX statement.",
        ],
        actions: &[
            "Revise the statement to include only a single index key (with VECTOR attribute).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_INDEX_NO_VECTOR,
        symbol: "E_VECTOR_INDEX_NO_VECTOR",
        description: "No index key with VECTOR attribute specified in CREATE VECTOR INDEX statement for index <<name>>.",
        reasons: &[
            "An index key with VECTOR attribute must be included in CREATE VECTOR INDEX statement.",
        ],
        actions: &[
            "Revise the statement to include an index key with VECTOR attribute.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_FUNC_ORDER_CONST,
        symbol: "E_VECTOR_FUNC_ORDER_CONST",
        description: "Vector function (<<term>>) in ORDER BY clause must use a constant for <<option>>.",
        reasons: &[
            "A vector function (<<term>>) in ORDER BY clause uses a non-constant for specifying <<option>>.",
        ],
        actions: &[
            "Revise the statement to use a constant for the order option.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_FUNC_ORDER_OPTION,
        symbol: "E_VECTOR_FUNC_ORDER_OPTION",
        description: "Vector function (<<term>>) in ORDER BY clause must use ASC and NULLS LAST.",
        reasons: &[
            "A vector function (<<term>>) in ORDER BY clause uses an invalid option <<option>>.",
        ],
        actions: &[
            "Revise the statement to use only ASC and NULLS LAST order options.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_DISTINCT_ARRAY_KEY,
        symbol: "E_VECTOR_DISTINCT_ARRAY_KEY",
        description: "Cannot use DISTINCT in an array index key with VECTOR attribute in CREATE INDEX statement.",
        reasons: &[
            "An array index key with VECTOR attribute is specified using DISTINCT in CREATE INDEX statement.",
        ],
        actions: &[
            "Revise the statement to remove DISTINCT in array index key with VECTOR attribute.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_CONSTANT_INDEX_KEY,
        symbol: "E_VECTOR_CONSTANT_INDEX_KEY",
        description: "Cannot use a constant construct (object or array) in an index key with VECTOR attribute in CREATE INDEX statement.",
        reasons: &[
            "An index key (<<name>>) with VECTOR attribute is specified as an object construct or array construct in CREATE INDEX statement.",
        ],
        actions: &[
            "Revise the statement to not use a constant construct in index key with VECTOR attribute.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PLAN,
        symbol: "E_PLAN",
        description: "A planning error occurred.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_REPREPARE,
        symbol: "E_REPREPARE",
        description: "Reprepare error",
        reasons: &[
            "A parsing error occurred when re-preparing a statement.",
            "There was an error building the plan when re-preparing a statement.",
            "There was an error storing the re-prepared plan in the cache.",
        ],
        actions: &[
            "Prepare the statement under a new name.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_TERM_NAME,
        symbol: "E_NO_TERM_NAME",
        description: "From Term must have a name or alias.",
        reasons: &["The statement includes an unnamed FROM term."],
        actions: &[
            "Revise the statement aliasing terms that are unnamed (i.e. non-keyspace path terms).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_ALIAS,
        symbol: "E_DUPLICATE_ALIAS",
        description: "Duplicate alias «alias» «location»",
        reasons: &[
            "The statement defines the alias multiple times for different elements.",
        ],
        actions: &["Revise the statement to ensure aliases are unique."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_WITH_ALIAS,
        symbol: "E_DUPLICATE_WITH_ALIAS",
        description: "Duplicate WITH alias reference in «term»: «alias» «location»",
        reasons: &[
            "The statement contains a duplicate reference to the noted alias in a FROM expression.",
        ],
        actions: &["Revise the statement to ensure alias references are unique."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UNKNOWN_FOR,
        symbol: "E_UNKNOWN_FOR",
        description: "Unknow alias in : ON KEY «expr» FOR «alias». ",
        reasons: &[
            "The statement contains an index join FOR clause referencing an unknown alias.",
        ],
        actions: &["Revise the statement correcting the alias."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SUBQUERY_MISSING_KEYS,
        symbol: "E_SUBQUERY_MISSING_KEYS",
        description: "FROM in correlated subquery must have USE KEYS clause: FROM «keyspace».",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SUBQUERY_MISSING_INDEX,
        symbol: "E_SUBQUERY_MISSING_INDEX",
        description: "No secondary index available for keyspace «keyspace» in correlated subquery.",
        reasons: &[
            "A correlated sub-query was specified but a suitable index on the keyspace was not available to support it.",
        ],
        actions: &[
            "Create the necessary index.",
            "Check the expected index is online.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SUBQUERY_PRIMARY_DOCS_EXCEEDED,
        symbol: "E_SUBQUERY_PRIMARY_DOCS_EXCEEDED",
        description: "Correlated subquery's keyspace «keyspace» cannot have more than «number» documents without appropriate secondary index",
        reasons: &[
            "A primary scan supporting a correlated sub-query returned more keys than permitted.",
        ],
        actions: &[
            "Create an appropriate secondary index to support the sub-query.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_SUCH_PREPARED,
        symbol: "E_NO_SUCH_PREPARED",
        description: "No such prepared statement: «name»",
        reasons: &[
            "The prepared statement referenced in the request doesn't exist.",
        ],
        actions: &["Verify that a valid prepared statement name is specified."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UNRECOGNIZED_PREPARED,
        symbol: "E_UNRECOGNIZED_PREPARED",
        description: "JSON unmarshalling error: «details»",
        reasons: &[
            "A request with a non-character string ˝prepared˝ parameter value was received.",
            "Automatic execution (auto_execute) failed to produce a prepared statement.",
            "Inter-node prepared statement distribution failed.",
        ],
        actions: &[
            "Ensure a valid value is passed for ˝prepared˝.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PREPARED_NAME,
        symbol: "E_PREPARED_NAME",
        description: "Unable to add name: «reason»",
        reasons: &[
            "A prepared statement with the same name was already defined.",
        ],
        actions: &[
            "Use a unique name for each prepared statement.",
            "Delete unwanted prepared statements.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PREPARED_DECODING,
        symbol: "E_PREPARED_DECODING",
        description: "Unable to decode prepared statement",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PREPARED_ENCODING_MISMATCH,
        symbol: "E_PREPARED_ENCODING_MISMATCH",
        description: "Encoded plan parameter does not match encoded plan of «name»",
        reasons: &[
            "The ˝encoded_plan˝ parameter received for a prepared statement didn't match the cached plan for the statement.",
            "Different nodes had a plan of the same name but their plans differed.",
        ],
        actions: &[
            "Resubmit the request and the cached plan will be used.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ENCODING_NAME_MISMATCH,
        symbol: "E_ENCODING_NAME_MISMATCH",
        description: "Mismatching name in encoded plan, expecting: «expected», found: «found»",
        reasons: &[
            "The name in an encoded plan doesn't match the prepared statement's name.",
        ],
        actions: &[
            "Correct the request if passing an encoded plan.",
            "Delete the entry from the prepareds cache.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ENCODING_CONTEXT_MISMATCH,
        symbol: "E_ENCODING_CONTEXT_MISMATCH",
        description: "Mismatching query_context in encoded plan",
        reasons: &[
            "The query context in an encoded plan doesn't match the prepared statement's query context.",
        ],
        actions: &[
            "Correct the request if passing an encoded plan.",
            "Delete the entry from the prepareds cache.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PREDEFINED_PREPARED_NAME,
        symbol: "E_PREDEFINED_PREPARED_NAME",
        description: "Prepared name «name» is predefined (reserved).",
        reasons: &[],
        actions: &[
            "Don't use predefined names for prepared statements.\nPredefined names have a double underscore ('__') prefix and include: '__get','__insert','__upsert','__update' and '__delete'.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_INDEX_JOIN,
        symbol: "E_NO_INDEX_JOIN",
        description: "No index available for join term «term»",
        reasons: &[
            "There was no available index to support the index join or NEST on the noted term.",
        ],
        actions: &[
            "Create an appropriate secondary index to support the join or NEST statement.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_USE_KEYS_USE_INDEXES,
        symbol: "E_USE_KEYS_USE_INDEXES",
        description: "From Expression Term cannot have USE KEYS or USE INDEX Clause",
        reasons: &[
            "An expression term in a from clause specifies USE KEYS or USE INDEX.\ne.g. SELECT * FROM (SELECT * FROM default) a USE KEYS['key']",
        ],
        actions: &[
            "Revise the statement removing the invalid clauses or expression term.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_INDEX_SERVICE,
        symbol: "E_NO_INDEX_SERVICE",
        description: "Index service not available.",
        reasons: &["No active Index service nodes were found in this cluster."],
        actions: &[
            "Ensure the Index service is defined and operational in the cluster before attempting index operations.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_PRIMARY_INDEX,
        symbol: "E_NO_PRIMARY_INDEX",
        description: "No index available on keyspace «keyspace» that matches your query. Use CREATE PRIMARY INDEX ON «keyspace» to create a primary index, or check that your expected index is online.",
        reasons: &[
            "The statement was attempting to scan the keyspace but there was no index available to support the scan.",
        ],
        actions: &["Create a appropriate index to support the scan."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PRIMARY_INDEX_OFFLINE,
        symbol: "E_PRIMARY_INDEX_OFFLINE",
        description: "Primary index «indexname» not online.",
        reasons: &[
            "A statement was attempting to scan a keyspace using a primary index however the index was not online.",
        ],
        actions: &[
            "Check the state of the index and build it if necessary.",
            "Create a appropriate index to support the scan.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_LIST_SUBQUERIES,
        symbol: "E_LIST_SUBQUERIES",
        description: "Error listing sub-queries.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NOT_GROUP_KEY_OR_AGG,
        symbol: "E_NOT_GROUP_KEY_OR_AGG",
        description: "Expression «expression» must depend only on group keys or aggregates.",
        reasons: &[
            "The statement contained grouping and an expression in the projection referenced a value that was not a grouping key or an aggregate.\ne.g. SELECT a FROM b GROUP BY c",
        ],
        actions: &[
            "Revise the statement to use only grouping keys or aggregates in the projection.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_ALREADY_EXISTS,
        symbol: "E_INDEX_ALREADY_EXISTS",
        description: "The index «name» already exists.",
        reasons: &[
            "An attempt was made to create an index with a name that already exists.",
        ],
        actions: &[
            "Verify that existing index has the desired definition.",
            "Use unique index names.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AMBIGUOUS_META,
        symbol: "E_AMBIGUOUS_META",
        description: "«meta-term» in query with multiple FROM terms requires an argument",
        reasons: &[
            "A statement with multiple FROM terms includes meta-data function without a qualifying argument.",
        ],
        actions: &[
            "Add the term qualification argument to the meta-data function.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEXER_DESC_COLLATION,
        symbol: "E_INDEXER_DESC_COLLATION",
        description: "DESC option is not supported by the indexer.",
        reasons: &["The GSI indexer doesn't support descending key ordering."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PLAN_INTERNAL,
        symbol: "E_PLAN_INTERNAL",
        description: "Plan error: «what»",
        reasons: &[
            "An internal error occurred whilst generating the query plan.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ALTER_INDEX,
        symbol: "E_ALTER_INDEX",
        description: "ALTER INDEX not supported",
        reasons: &[
            "An ALTER INDEX statement was attempted but is not supported by the indexer.",
        ],
        actions: &["Drop and re-create to alter an index."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PLAN_NO_PLACEHOLDER,
        symbol: "E_PLAN_NO_PLACEHOLDER",
        description: "Placeholder is not allowed in keyspace",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_ANSI_JOIN,
        symbol: "E_NO_ANSI_JOIN",
        description: "No index available for ANSI «type» term «alias»",
        reasons: &[
            "The statement contains an ANSI JOIN with the noted alias and no index exists to support it.",
            "The statement contains an ANSI NEST with the noted alias and no index exists to support it.",
        ],
        actions: &["Create a appropriate index to support the operation."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PARTITION_INDEX_NOT_SUPPORTED,
        symbol: "E_PARTITION_INDEX_NOT_SUPPORTED",
        description: "PARTITION index is not supported by indexer.",
        reasons: &[
            "The statement includes an index partitioning clause that isn't supported by the indexer.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_GSI,
        symbol: "E_GSI",
        description: "An error occurred in GSI",
        reasons: &[
            "An attempt was made to define an index with a duplicate name.",
            "An attempt was made to manage an index that was not defined.",
            "An operation the user lacked necessary permissions for was attempted on an index.",
            "An internal error occurred in the GSI sub-component.",
        ],
        actions: &[
            "Review the reported error for more detail on why the operation failed and possible user actions.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: W_GSI_TRANSIENT,
        symbol: "W_GSI_TRANSIENT",
        description: "A transient error occurred in GSI",
        reasons: &[],
        actions: &[
            "Review the error details for possible user actions.\nGSI will typically handle this condition and retry the operation automatically when appropriate.\nThe state of index build operations can be monitored via the GSI endpoint or system:indexes collection.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_GSI_TEMP_FILE_SIZE,
        symbol: "E_GSI_TEMP_FILE_SIZE",
        description: "«request» temp file size exceeded limit «limit», «size»",
        reasons: &[
            "GSI was unable to write to a temporary file for the request as the configured temporary disk space limit was reached.",
        ],
        actions: &[
            "Check the settings indicated permit sufficient space for the operation.",
            "Review active statements and their temporary space requirements.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_KNN_SEARCH_INDEX,
        symbol: "E_NO_KNN_SEARCH_INDEX",
        description: "Search() function with KNN has no search index",
        reasons: &[
            "Query uses Search() as predicate with KNN, but there is no matching FTS index",
        ],
        actions: &["Create appropriate FTS index"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ENCODED_PLAN_NOT_ALLOWED,
        symbol: "E_ENCODED_PLAN_NOT_ALLOWED",
        description: "Encoded plan use is not allowed in serverless mode.",
        reasons: &[
            "The server was operating in ˝serverless˝ mode and the request attempted to pass an encoded plan for execution.",
        ],
        actions: &["Submit the statement text for planning and execution."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CBO,
        symbol: "E_CBO",
        description: "Error occurred during cost-based optimization: «what»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_STAT,
        symbol: "E_INDEX_STAT",
        description: "Invalid index statistics for index «name» : «what»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_DOCUMENT_KEY_TYPE,
        symbol: "W_DOCUMENT_KEY_TYPE",
        description: "Document key must be a string: «key»",
        reasons: &[
            "A key in a USE KEYS clause was not a string.\ne.g. SELECT * FROM default USE KEYS[123];",
        ],
        actions: &["Correct the key in the statement."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: W_GENERIC,
        symbol: "W_GENERIC",
        description: "A non-specific warning was raised.",
        reasons: &[
            "Clustering was unable to add a Query service node due to the detailed incompatibility.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: E_INTERNAL,
        symbol: "E_INTERNAL",
        description: "An internal error occurred.",
        reasons: &[
            "A sub-component such as GSI may be reporting an error.",
            "An internal error occurred.",
        ],
        actions: &[
            "If reported by a sub-component, review the error details for appropriate actions.",
            "Contact support",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_PANIC,
        symbol: "E_EXECUTION_PANIC",
        description: "A panic occurred during execution.",
        reasons: &[
            "The server encountered an internal error that resulted in a panic which halted request processing.",
        ],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_INTERNAL,
        symbol: "E_EXECUTION_INTERNAL",
        description: "Execution internal error: «what»",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_PARAMETER,
        symbol: "E_EXECUTION_PARAMETER",
        description: "Execution parameter error: «reason»",
        reasons: &[
            "The request has a USING clause and provides parameters.",
            "The request has a USING clause that includes a non-static value.",
        ],
        actions: &[
            "Either provide parameters or use a USING clause.",
            "Use only static value in a USING clause.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_PARSING,
        symbol: "E_PARSING",
        description: "Expression parsing «expression» failed",
        reasons: &[
            "A projection EXCLUDE clause in the statement contains a string reference that cannot be parsed.",
        ],
        actions: &[
            "Revise the statement to use only valid expressions in projection EXCLUDE clauses.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TEMP_FILE_QUOTA,
        symbol: "E_TEMP_FILE_QUOTA",
        description: "Temporary file quota exceeded",
        reasons: &[
            "An order by operation was unable to spill to disk as the temporary space quota was hit.",
            "A group by operation was unable to spill to disk as the temporary space quota was hit.",
            "An ordered sequential scan was unable to spill to disk as the temporary space quota was hit.",
        ],
        actions: &[
            "Review the Query service temporary space quota setting meets with requirements.",
            "Review statements to reduce the amount of data sorted and grouped.",
            "Create a primary index to support ordered document key operations.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_KEY_VALIDATION,
        symbol: "E_EXECUTION_KEY_VALIDATION",
        description: "Out of key validation space.",
        reasons: &[
            "The INSERT operation was using a sequential scan exhausted the space reserved to exclude new keys.",
            "The space reserved to record keys processed by the UPSERT statement was exhausted.",
        ],
        actions: &[
            "Divide the statement into portions that don't exceed the key validation space.",
            "Create a suitable secondary index to support the statement.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_CURL,
        symbol: "E_EXECUTION_CURL",
        description: "Error executing CURL function",
        reasons: &[
            "An attempt was made to access a URL outside of the configured list.",
            "An attempt was made to access a restricted URL using the CURL() function.",
            "An attempt was made to access an invalid URL.",
            "The CURL() function failed to complete within the specified time limit.",
            "An invalid option was passed to the CURL() function.",
            "The CURL() function failed to access the URL for the reason noted.",
        ],
        actions: &[
            "Check the server configuration permits access to the URL.",
            "Don't attempt to access restricted URLs.",
            "Ensure the URL is correctly formed with a valid, supported scheme.",
            "Ensure the time limit specified is suitable for the URL response time.",
            "Refer to the documentation for valid options.",
            "Depending on the error, contact your administrator or support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_EXECUTION_STATEMENT_STOPPED,
        symbol: "E_EXECUTION_STATEMENT_STOPPED",
        description: "Execution of statement has been stopped.",
        reasons: &[
            "A nested statement was stopped when the nesting statement stopped.",
        ],
        actions: &[
            "Verify it is expected that the nesting statement was stopped.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_EVALUATION,
        symbol: "E_EVALUATION",
        description: "Error evaluating «what»",
        reasons: &[
            "The noted error occurred during the evaluation of the indicated item.",
        ],
        actions: &["Review the indicated error and it's actions."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_EVALUATION_ABORT,
        symbol: "E_EVALUATION_ABORT",
        description: "Abort: «reason»",
        reasons: &[
            "The SQL++ abort() function was called in the statement.\ne.g. SELECT abort('An example cause')",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_EXPLAIN,
        symbol: "E_EXPLAIN",
        description: "EXPLAIN: Error marshalling JSON.",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_EXPLAIN_FUNCTION,
        symbol: "E_EXPLAIN_FUNCTION",
        description: "EXPLAIN FUNCTION: «reason»",
        reasons: &[
            "The statement failed to build a query plan for an embedded query.",
            "An internal error occurred writing the plan as JSON.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_GROUP_UPDATE,
        symbol: "E_GROUP_UPDATE",
        description: "Error updating «phase» GROUP value",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_DATE,
        symbol: "W_DATE",
        description: "Date error",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_OVERFLOW,
        symbol: "W_DATE_OVERFLOW",
        description: "Date error: Overflow",
        reasons: &[],
        actions: &[
            "Ensure date values are in the range -9999-01-01 12:00:00.000000000 UTC to 9999-12-31 09:59:59.999000000 UTC.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_INVALID_FORMAT,
        symbol: "W_DATE_INVALID_FORMAT",
        description: "Date error: Invalid format",
        reasons: &[],
        actions: &["Correct the date format specification."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_INVALID_DATE_STRING,
        symbol: "W_DATE_INVALID_DATE_STRING",
        description: "Date error: Invalid date string",
        reasons: &[
            "A date function converting a string to a date encountered an invalid element in the string, such as a numeric month outside the range 1-12.",
        ],
        actions: &["Correct the date string value."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_PARSE_FAILED,
        symbol: "W_DATE_PARSE_FAILED",
        description: "Date error: Failed to parse",
        reasons: &[
            "A date function converting a string to a date failed to parse the input string according to the format.",
        ],
        actions: &["Correct the date string value."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_INVALID_COMPONENT,
        symbol: "W_DATE_INVALID_COMPONENT",
        description: "Date error: Invalid component",
        reasons: &[
            "A date function operating on elements in a date value was given an invalid date component.",
        ],
        actions: &["Correct the date component specified."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_NON_INT_VALUE,
        symbol: "W_DATE_NON_INT_VALUE",
        description: "Date error: Value is not an integer",
        reasons: &[
            "A date function manipulating a component of a date value was provided a non-integer number.",
        ],
        actions: &["Correct the argument to the date function."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_INVALID_ARGUMENT,
        symbol: "W_DATE_INVALID_ARGUMENT",
        description: "Date error: Invalid argument",
        reasons: &["A date function argument was not of the correct type."],
        actions: &["Correct the argument to the date function."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_DATE_INVALID_TIMEZONE,
        symbol: "W_DATE_INVALID_TIMEZONE",
        description: "Date error: Invalid time zone",
        reasons: &[
            "A date value or function argument includes an unknown or invalid timezone.",
        ],
        actions: &[
            "Correct the timezone in the date value or function argument.\nAbsolute offsets are recommended in place of time zone names.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_INVALID_VALUE,
        symbol: "E_INVALID_VALUE",
        description: "An invalid value was encountered.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_EXPRESSION,
        symbol: "E_INVALID_EXPRESSION",
        description: "Invalid expression",
        reasons: &[
            "An expression in an EXCLUDE clause was invalid.",
            "An expression in an argument to OBJECT_REMOVE_FIELDS() was invalid.",
        ],
        actions: &["Revise the statement providing valid a expression."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UNSUPPORTED_EXPRESSION,
        symbol: "E_UNSUPPORTED_EXPRESSION",
        description: "iUnsupported expression",
        reasons: &[
            "An expression in an EXCLUDE clause is not supported.",
            "An expression in an argument to OBJECT_REMOVE_FIELDS() is not supported.",
        ],
        actions: &["Revise the statement providing valid a expression."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_RANGE,
        symbol: "E_RANGE",
        description: "Out of range evaluating «term»",
        reasons: &[
            "An ARRAY_RANGE() call exceeds the permitted limit for the number of elements produced.",
            "An ARRAY_REPEAT() call exceeds the permitted limit for the number of elements produced.",
            "A REPEAT() call exceeds the permitted limit for the resulting string's size.",
            "A DATE_RANGE_STR() call exceeds the permitted limit for the number of values produced.",
            "A DATE_RANGE_MILLIS() call exceeds the permitted limit for the number of values produced.",
        ],
        actions: &[
            "Revise the function arguments to produce results within the permitted limit.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: W_DIVIDE_BY_ZERO,
        symbol: "W_DIVIDE_BY_ZERO",
        description: "Division by 0.",
        reasons: &[
            "An arithmetic operation dividing by zero was encountered during the statement evaluation.",
        ],
        actions: &[
            "If required, revise the statement as necessary to avoid such operations.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_DUPLICATE_FINAL_GROUP,
        symbol: "E_DUPLICATE_FINAL_GROUP",
        description: "Duplicate Final Group.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INSERT_KEY,
        symbol: "E_INSERT_KEY",
        description: "No INSERT key for «document»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INSERT_VALUE,
        symbol: "E_INSERT_VALUE",
        description: "No INSERT value for «document»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INSERT_KEY_TYPE,
        symbol: "E_INSERT_KEY_TYPE",
        description: "Cannot INSERT non-string key «key» of type «type»",
        reasons: &[
            "The statement includes an INSERT operation with a non-string key value.\ne.g. INSERT INTO default VALUES(1,{'the':'value'})",
        ],
        actions: &[
            "Revise the statement to ensure keys are always string values.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INSERT_OPTIONS_TYPE,
        symbol: "E_INSERT_OPTIONS_TYPE",
        description: "Cannot INSERT non-OBJECT options «options» of type «type»",
        reasons: &[
            "The statement includes an INSERT operation with a non-OBJECT options value.\ne.g. INSERT INTO default VALUES('the_key',{'the':'value'},null)",
        ],
        actions: &[
            "Revise the statement to ensure insert options are always provided as an object value or omitted if unneeded.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPSERT_KEY,
        symbol: "E_UPSERT_KEY",
        description: "No UPSERT key for «value»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPSERT_KEY_ALREADY_MUTATED,
        symbol: "E_UPSERT_KEY_ALREADY_MUTATED",
        description: "Cannot act on the same key multiple times in an UPSERT statement",
        reasons: &[
            "The UPSERT statement was trying to modify the same key multiple times.\ne.g. UPSERT INTO default VALUES ('key0',{}),('key0',{})",
        ],
        actions: &["Revise the statement to ensure that keys are unique."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPSERT_VALUE,
        symbol: "E_UPSERT_VALUE",
        description: "No UPSERT value for «value»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPSERT_KEY_TYPE,
        symbol: "E_UPSERT_KEY_TYPE",
        description: "Cannot UPSERT non-string key «key» of type «type».",
        reasons: &[
            "The statement includes an UPSERT operation with a non-string key value.\ne.g. UPSERT INTO default VALUES(1,{'the':'value'})",
        ],
        actions: &[
            "Revise the statement to ensure keys are always string values.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UPSERT_OPTIONS_TYPE,
        symbol: "E_UPSERT_OPTIONS_TYPE",
        description: "Cannot UPSERT non-OBJECT options «value» of type «type».",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DELETE_ALIAS_MISSING,
        symbol: "E_DELETE_ALIAS_MISSING",
        description: "DELETE alias «alias» not found in item «value»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DELETE_ALIAS_METADATA,
        symbol: "E_DELETE_ALIAS_METADATA",
        description: "DELETE alias «alias» has no metadata in item.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_ALIAS_MISSING,
        symbol: "E_UPDATE_ALIAS_MISSING",
        description: "UPDATE alias «alias» not found in item",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_ALIAS_METADATA,
        symbol: "E_UPDATE_ALIAS_METADATA",
        description: "UPDATE alias «alias» has no metadata in item.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_MISSING_CLONE,
        symbol: "E_UPDATE_MISSING_CLONE",
        description: "Missing UPDATE clone.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_INVALID_FIELD,
        symbol: "E_UPDATE_INVALID_FIELD",
        description: "Invalid field update.",
        reasons: &[
            "An attempt was made to update a field that doesn't support updating or to set an unsupported value for the field.",
        ],
        actions: &["Revise statement to not update the field."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_UNNEST_INVALID_POSITION,
        symbol: "E_UNNEST_INVALID_POSITION",
        description: "Invalid UNNEST position of type «type»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SCAN_VECTOR_TOO_MANY_SCANNED_BUCKETS,
        symbol: "E_SCAN_VECTOR_TOO_MANY_SCANNED_BUCKETS",
        description: "The scan_vector parameter should not be used for queries accessing more than one keyspace.  Use scan_vectors instead. Keyspaces: «list»",
        reasons: &[
            "The request parameter ˝scan_vector˝ was specified for the request which references multiple keyspaces.",
        ],
        actions: &[
            "Use the ˝scan_vectors˝ request parameter with statements referring to multiple keyspaces.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DYNAMIC_AUTH,
        symbol: "E_DYNAMIC_AUTH",
        description: "Dynamic auth error",
        reasons: &[
            "The determination of dynamic privileges required by the request failed.",
        ],
        actions: &[
            "Revise the request to ensure all keyspace references can be resolved enabling dynamic authorisation to proceed.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTIONAL_AUTH,
        symbol: "E_TRANSACTIONAL_AUTH",
        description: "Transactional auth error",
        reasons: &[
            "The determination of transaction privileges required by the request failed.",
        ],
        actions: &["Verify the user is permitted to run transaction statements."],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_USER_NOT_FOUND,
        symbol: "E_USER_NOT_FOUND",
        description: "Unable to find user «user».",
        reasons: &[
            "A role grant or revoke statement referred to a user that didn't exist.",
            "A user alter or drop statement referred to a user that didn't exist.",
        ],
        actions: &[
            "Verify the user referenced in the statement exists prior to executing the statement.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_USER_EXISTS,
        symbol: "E_USER_EXISTS",
        description: "User «name» already exists.",
        reasons: &[
            "A create user command was attempted but the user specified already existed.",
        ],
        actions: &[
            "Revise the statement if intending to create a different user.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_USER_ATTRIBUTE,
        symbol: "E_USER_ATTRIBUTE",
        description: "Attribute «attribute» «reason» for «domain» users.",
        reasons: &[
            "A create user statement creating a ˝local˝ domain user did not specify the password attribute.",
            "A create or alter user statement for a ˝remote˝ domain user specified the password attribute.",
        ],
        actions: &[
            "Specify the password when creating ˝local˝ domain users.",
            "Do not specify the password when creating or altering ˝remote˝ domain users.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_GROUP_EXISTS,
        symbol: "E_GROUP_EXISTS",
        description: "Group «name» already exists.",
        reasons: &[
            "A create group command was attempted but the group specified already existed.",
        ],
        actions: &[
            "Revise the statement if intending to create a different group.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_GROUP_NOT_FOUND,
        symbol: "E_GROUP_NOT_FOUND",
        description: "Unable to find group «name».",
        reasons: &[
            "A group role grant or revoke statement specified a group that was not defined.",
            "A group alter or drop statement specified a group that was not defined.",
            "A create or alter user statement specified a group that was not defined.",
        ],
        actions: &[
            "Ensure the group exists before attempting role operations.",
            "Ensure the group exists before attempting to alter or drop it.",
            "Ensure the group exists before assigning to a user.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_GROUP_ATTRIBUTE,
        symbol: "E_GROUP_ATTRIBUTE",
        description: "Attribute «attribute» «reason» for groups.",
        reasons: &["A create group statement did not specify any roles."],
        actions: &["Specify at least one role when creating a group."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MISSING_ATTRIBUTES,
        symbol: "E_MISSING_ATTRIBUTES",
        description: "Missing attributes for «what».",
        reasons: &[
            "A create user statement did not specify any attributes.",
            "An alter user statement did not specify any attributes.",
            "A create group statement did not specify any attributes.",
            "An alter group statement did not specify any attributes.",
        ],
        actions: &[
            "Specify at least one attribute when creating users or groups.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ROLE_REQUIRES_KEYSPACE,
        symbol: "E_ROLE_REQUIRES_KEYSPACE",
        description: "Role «role» requires a keyspace.",
        reasons: &[
            "A role in a grant or revoke statement requires qualification with a keyspace.",
            "A role in a group create or alter statement requires qualification with a keyspace.",
        ],
        actions: &[
            "Revise the statement to provide the necessary keyspace qualification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ROLE_INCORRECT_LEVEL,
        symbol: "E_ROLE_INCORRECT_LEVEL",
        description: "Role «role» cannot be specified at the «level» level.",
        reasons: &[
            "An attempt was made to specify a scope role as a collection role.",
        ],
        actions: &["Correct the role qualification in the statement."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ROLE_TAKES_NO_KEYSPACE,
        symbol: "E_ROLE_TAKES_NO_KEYSPACE",
        description: "Role «role» does not take a keyspace.",
        reasons: &[
            "A keyspace qualification has been provided for a role that isn't qualified by keyspace in a grant or revoke role statement.",
            "A keyspace qualification has been provided for a role that isn't qualified by keyspace in a group create or alter statement.",
        ],
        actions: &[
            "Remove the qualification from the role that isn't qualified by keyspace.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_SUCH_KEYSPACE,
        symbol: "E_NO_SUCH_KEYSPACE",
        description: "Keyspace «keyspace» is not valid.",
        reasons: &[
            "A keyspace qualification provided in a grant or revoke role statement was invalid.",
            "A keyspace qualification provided in a group create or alter statement was invalid.",
        ],
        actions: &[
            "Revise the statement to provide a valid keyspace qualification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_SUCH_SCOPE,
        symbol: "E_NO_SUCH_SCOPE",
        description: "Scope «scope» is not valid.",
        reasons: &[
            "The scope provided to qualify ˝scope_admin˝ role in a grant or revoke statement was not valid.",
        ],
        actions: &[
            "Revise the statement to provide a valid scope qualification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NO_SUCH_BUCKET,
        symbol: "E_NO_SUCH_BUCKET",
        description: "Bucket «bucket» is not valid.",
        reasons: &[
            "The bucket provided to qualify a role in a grant or revoke statement was not valid.",
        ],
        actions: &[
            "Revise the statement to provide a valid bucket qualification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ROLE_NOT_FOUND,
        symbol: "E_ROLE_NOT_FOUND",
        description: "Role «role» is not valid.",
        reasons: &[
            "An invalid role was provided in a grant or revoke role statement.",
            "An invalid role was provided in a group create or alter statement.",
        ],
        actions: &["Revise the statement to provide a valid role."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: W_ROLE_ALREADY_PRESENT,
        symbol: "W_ROLE_ALREADY_PRESENT",
        description: "User «name» already has role «role» «bucket»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_ROLE_NOT_PRESENT,
        symbol: "W_ROLE_NOT_PRESENT",
        description: "«entity» «name» did not have role «role»",
        reasons: &[
            "An attempt was made to revoke a role from a user or group that was not held by the user or group.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_USER_WITH_NO_ROLES,
        symbol: "W_USER_WITH_NO_ROLES",
        description: "User «name» has no roles. Connecting with this user may not be possible",
        reasons: &["The user has had all roles revoked."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_GROUP_WITH_NO_ROLES,
        symbol: "W_GROUP_WITH_NO_ROLES",
        description: "Group «name» has no roles.",
        reasons: &["The group has had all roles revoked."],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_HASH_TABLE_PUT,
        symbol: "E_HASH_TABLE_PUT",
        description: "Hash Table Put failed",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_HASH_TABLE_GET,
        symbol: "E_HASH_TABLE_GET",
        description: "Hash Table Get failed",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_MULTI_UPDATE,
        symbol: "E_MERGE_MULTI_UPDATE",
        description: "Multiple UPDATE/DELETE of the same document (document key «key») in a MERGE statement",
        reasons: &[
            "During a merge statement a key was detected multiple times in update and/or delete operations.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MERGE_MULTI_INSERT,
        symbol: "E_MERGE_MULTI_INSERT",
        description: "Multiple INSERT of the same document (document key «key») in a MERGE statement",
        reasons: &[
            "The INSERT action of the MERGE statement had previously inserted the noted key.\ne.g. MERGE INTO default\n     USING [{},{}] AS source\n     ON default.id IS VALUED\n     WHEN NOT MATCHED THEN\n     INSERT ('key',{})\n     ;",
        ],
        actions: &[
            "Revise the statement logic to ensure only unique keys are produced.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_WINDOW_EVALUATION,
        symbol: "E_WINDOW_EVALUATION",
        description: "An error occurred during WINDOW evaluation",
        reasons: &[
            "An expression in the window aggregate did not evaluate to a number.",
            "The window order clause evaluation failed.",
            "The window partitioning clause evaluation failed.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISE_INDEX,
        symbol: "E_ADVISE_INDEX",
        description: "AdviseIndex: Error marshalling JSON.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISE_INVALID_RESULTS,
        symbol: "E_ADVISE_INVALID_RESULTS",
        description: "Invalid advise results",
        reasons: &["The results from an advisor session are not valid."],
        actions: &[
            "Repeat the session.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UPDATE_STATISTICS,
        symbol: "E_UPDATE_STATISTICS",
        description: "An internal error occurred during update statistics processing.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SUBQUERY_BUILD,
        symbol: "E_SUBQUERY_BUILD",
        description: "Unable to run subquery",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_LEADING_KEY_MISSING_NOT_SUPPORTED,
        symbol: "E_INDEX_LEADING_KEY_MISSING_NOT_SUPPORTED",
        description: "Indexing leading key MISSING values are not supported by indexer.",
        reasons: &[
            "The index definition includes missing values for the leading key and this feature is not supported by the indexer.",
        ],
        actions: &[
            "Revise the index definition to not include missing leading key values.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_NOT_IN_MEMORY,
        symbol: "E_INDEX_NOT_IN_MEMORY",
        description: "Index «name» is not in memory",
        reasons: &[
            "The cost of an index scan could not be calculated as the index was not in memory.",
            "Statistics for the index could not be updated as it was not in memory.",
        ],
        actions: &[
            "Re-submit the request.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_MISSING_SYSTEMCBO_STATS,
        symbol: "E_MISSING_SYSTEMCBO_STATS",
        description: "System Collection 'N1QL_CBO_STATS' is required for UPDATE STATISTICS (ANALYZE)",
        reasons: &[
            "The system bucket N1QL_CBO_STATS does not exist and could not be created.",
        ],
        actions: &[
            "Manually create the bucket and re-submit the request.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_INDEX_NAME,
        symbol: "E_INVALID_INDEX_NAME",
        description: "index name «name» must be a string",
        reasons: &[
            "An index name in the index build statement was not a string value compliant with index naming requirements.",
            "An index name in the update statistics statement was not a string value compliant with index naming requirements.",
        ],
        actions: &["Revise the statement to provide a valid index name."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_NOT_FOUND,
        symbol: "E_INDEX_NOT_FOUND",
        description: "index «name» is not found",
        reasons: &[
            "The index specified in an index build statement does not exist.",
            "The index specified in an update statistics statement does not exist.",
        ],
        actions: &["Revise the statement to provide a valid index name."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_UPD_STATS,
        symbol: "E_INDEX_UPD_STATS",
        description: "Error with UPDATE STATISTICS for indexes («names»): «reason»",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TIME_PARSE,
        symbol: "E_TIME_PARSE",
        description: "Error parsing time string «string»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_JOIN_ON_PRIMARY_DOCS_EXCEEDED,
        symbol: "E_JOIN_ON_PRIMARY_DOCS_EXCEEDED",
        description: "Inner of nested-loop join «keyspace» cannot have more than 1000 documents without appropriate secondary index",
        reasons: &[
            "A nested loop join using a primary scan produced more than 1000 documents.\nThis limit is imposed for resource usage and performance considerations as the inner leg of such a join may be executed repeatedly.",
        ],
        actions: &[
            "Limit the number of documents accessed in this manner or create an appropriate secondary index to support the join.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_QUERY_VECTOR,
        symbol: "E_INVALID_QUERY_VECTOR",
        description: "Invalid parameter (query vector) specified for vector function: <<msg>>.",
        reasons: &[
            "An invalid parameter (query vector) is specified for vector function: <<msg>>.",
        ],
        actions: &[
            "Revise the vector function to use a proper parameter (query vector).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_PROBES,
        symbol: "E_INVALID_PROBES",
        description: "Invalid parameter (probes) specified for vector function: <<msg>>.",
        reasons: &[
            "An invalid parameter (probes) is specified for vector function: <<msg>>.",
        ],
        actions: &[
            "Revise the vector function to use a proper parameter (probes).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_RERANK,
        symbol: "E_INVALID_RERANK",
        description: "Invalid parameter (rerank) specified for vector function: <<msg>>.",
        reasons: &[
            "An invalid parameter (rerank) is specified for vector function: <<msg>>.",
        ],
        actions: &[
            "Revise the vector function to use a proper parameter (rerank).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MAXHEAP_SIZE_EXCEEDED,
        symbol: "E_MAXHEAP_SIZE_EXCEEDED",
        description: "Total heap size for (Limit + Offset) exceeded maximum heap size allowed for vector index <<index>>.",
        reasons: &[
            "Limit and/or Offset specified as query parameters have values that exceeded maximum allowed values for vector index.",
        ],
        actions: &[
            "Specify Limit/Offset as constants and re-submit the query.",
            "Use values that do not exceed the maximum allowed value and re-submit the query.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MEMORY_QUOTA_EXCEEDED,
        symbol: "E_MEMORY_QUOTA_EXCEEDED",
        description: "Request has exceeded memory quota.",
        reasons: &[
            "The tracked memory required for the request exceeded the quota set for it.",
        ],
        actions: &[
            "Review the statement execution plan for efficiency.",
            "Review the volume of data the statement is expected to process and the operations used.",
            "Increase the memory quota if appropriate.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NIL_EVALUATE_PARAM,
        symbol: "E_NIL_EVALUATE_PARAM",
        description: "nil «param» parameter for evaluation",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_ACTION,
        symbol: "E_BUCKET_ACTION",
        description: "Unable to complete action after «count» attempts",
        reasons: &[
            "The indicated action was attempted a number of times without success.",
        ],
        actions: &[
            "If the associated error indicates an infrastructure issue, verify all cluster resources are accessible, available and online.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_MISSING_KEY,
        symbol: "W_MISSING_KEY",
        description: "Key(s) in USE KEYS hint not found",
        reasons: &["A key in a USE KEYS clause was not found."],
        actions: &["If necessary, revise the keys listed."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_NODE_QUOTA_EXCEEDED,
        symbol: "E_NODE_QUOTA_EXCEEDED",
        description: "Query node has run out of memory",
        reasons: &[
            "A node level memory quota was in effect and while trying to execute the request the limit was reached",
        ],
        actions: &[
            "Verify the memory requirements of the request, possibly setting a request memory quota.",
            "Retry the request with less concurrent activity.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TENANT_QUOTA_EXCEEDED,
        symbol: "E_TENANT_QUOTA_EXCEEDED",
        description: "«entity» has run out of memory: requested «size», limit «limit»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_RECONSTRUCT,
        symbol: "E_VALUE_RECONSTRUCT",
        description: "Failed to reconstruct value",
        reasons: &[
            "An error occurred reconstructing a value data spilled temporarily to disk during the request processing.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_INVALID,
        symbol: "E_VALUE_INVALID",
        description: "Invalid reconstructed value",
        reasons: &[
            "An error occurred reconstructing a value data spilled temporarily to disk during the request processing.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_CREATE,
        symbol: "E_VALUE_SPILL_CREATE",
        description: "Failed to create spill file",
        reasons: &[
            "The request processing requires date be temporarily spilled to disk and the temporary file creation failed.",
        ],
        actions: &[
            "Review the Query service temporary data directory and validate the filesystem is in good order with sufficient space to support the node's temporary data requirements.",
            "Review the request memory quota, if in effect, and increase it if appropriate to avoid spilling.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_READ,
        symbol: "E_VALUE_SPILL_READ",
        description: "Failed to read from spill file",
        reasons: &[
            "An error occurred reading data spilled temporarily to disk during the request processing.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_WRITE,
        symbol: "E_VALUE_SPILL_WRITE",
        description: "Failed to write to spill file",
        reasons: &[
            "An error occurred writing data temporarily to disk during the request processing.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_SIZE,
        symbol: "E_VALUE_SPILL_SIZE",
        description: "Failed to determine spill file size",
        reasons: &[
            "An error occurred accessing the file used for data temporarily spilled to disk during the request processing.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_SEEK,
        symbol: "E_VALUE_SPILL_SEEK",
        description: "Failed to seek in spill file",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VALUE_SPILL_MAX_FILES,
        symbol: "E_VALUE_SPILL_MAX_FILES",
        description: "Too many spill files",
        reasons: &[
            "The operation is attempting to use more files for temporarily spilling data to disk than is permitted.",
        ],
        actions: &[
            "Increase your request memory quota.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SCHEDULER,
        symbol: "E_SCHEDULER",
        description: "The scheduler encountered an error in generating uuid for the task entry",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_TASK,
        symbol: "E_DUPLICATE_TASK",
        description: "Task already exists «task_id»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TASK_RUNNING,
        symbol: "E_TASK_RUNNING",
        description: "Task «id» is currently executing and cannot be deleted",
        reasons: &[
            "An attempt was made to delete a task that was active at the time.",
        ],
        actions: &[
            "Restrict task deletion attempts to tasks that have completed.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TASK_NOT_FOUND,
        symbol: "E_TASK_NOT_FOUND",
        description: "the task «id» was not found",
        reasons: &["An attempt was made to delete a task that did not exist."],
        actions: &[
            "Ensure the task specified exists before attempting to delete it.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TASK_INVALID_PARAMETER,
        symbol: "E_TASK_INVALID_PARAMETER",
        description: "Task parameter «param» not provided.",
        reasons: &[
            "An attempt was made to perform a task action without a valid task parameter.",
        ],
        actions: &[
            "Attempt to execute the task again. If unsuccessful, contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_REWRITE,
        symbol: "E_REWRITE",
        description: "An error occurred during query rewrite.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_INVALID_OPTION,
        symbol: "E_INFER_INVALID_OPTION",
        description: "Invalid INFER option argument.",
        reasons: &[
            "A non-object value was passed as the options parameter to INFER.",
            "An invalid field was specified in the INFER options parameter object.",
        ],
        actions: &[
            "Pass only an object value containing documented fields as the options to INFER.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_OPTION_MUST_BE_NUMERIC,
        symbol: "E_INFER_OPTION_MUST_BE_NUMERIC",
        description: "Option «option» must be numeric.",
        reasons: &["The INFER option noted was passed a non-numeric value."],
        actions: &["Revise the option values used in the statement."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_READING_NUMBER,
        symbol: "E_INFER_READING_NUMBER",
        description: "Error reading option «option».",
        reasons: &[
            "A string value was passed as the ˝flags˝ option to INFER and it did not parse as a number.",
        ],
        actions: &[
            "Revise the statement to pass a valid number, a string that parsed as a number (e.g. ˝0x10˝) or an array of valid flag-name strings.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_KEYSPACE_DOCUMENTS,
        symbol: "E_INFER_NO_KEYSPACE_DOCUMENTS",
        description: "Keyspace has no documents, schema inference not possible.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_CREATE_RETRIEVER,
        symbol: "E_INFER_CREATE_RETRIEVER",
        description: "Error creating document retriever.",
        reasons: &[
            "Flags used in an INFER statement did not permit any method of sampling the data.",
        ],
        actions: &[
            "Revise the flags option to permit at least one type of access for data sampling.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_RANDOM_ENTRY,
        symbol: "E_INFER_NO_RANDOM_ENTRY",
        description: "Keyspace does not support random document retrieval.",
        reasons: &[
            "An INFER statement attempted to use a random entry document interface to sample the data but this was not supported by the datastore.",
        ],
        actions: &[
            "Ensure flags permit other document sampling mechanisms to be tried.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_RANDOM_DOCS,
        symbol: "E_INFER_NO_RANDOM_DOCS",
        description: "Keyspace will not return random documents.",
        reasons: &[
            "An INFER statement attempted to use a random document interface to sample the data but this was not returning any documents.",
        ],
        actions: &[
            "Ensure flags permit other document sampling mechanisms to be tried.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_MISSING_CONTEXT,
        symbol: "E_INFER_MISSING_CONTEXT",
        description: "Missing expression context.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_EXPRESSION_EVAL,
        symbol: "E_INFER_EXPRESSION_EVAL",
        description: "Expression evaluation failed.",
        reasons: &[
            "Expression evaluation for an INFER statement failed with the error noted.",
        ],
        actions: &["Review the error details for appropriate actions."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_KEYSPACE_ERROR,
        symbol: "E_INFER_KEYSPACE_ERROR",
        description: "Keyspace error.",
        reasons: &[
            "An INFER statement encountered the noted error retrieving the keyspace document count.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_SUITABLE_PRIMARY_INDEX,
        symbol: "E_INFER_NO_SUITABLE_PRIMARY_INDEX",
        description: "No suitable primary index found.",
        reasons: &[
            "An INFER statement attempted to use a primary index from which to sample documents but no suitable index was found.",
        ],
        actions: &[
            "Review the INFER options to permit other document sampling methods.",
            "Create a suitable primary index.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_SUITABLE_SECONDARY_INDEX,
        symbol: "E_INFER_NO_SUITABLE_SECONDARY_INDEX",
        description: "No suitable secondary index found.",
        reasons: &[
            "An INFER statement attempted to use a secondary index from which to sample documents but no suitable index was found.",
        ],
        actions: &[
            "Review the INFER options to permit other document sampling methods.",
            "Create a suitable index.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: W_INFER_TIMEOUT,
        symbol: "W_INFER_TIMEOUT",
        description: "Stopped after exceeding infer_timeout. Schema may be incomplete.",
        reasons: &[
            "An INFER statement reached the specified time limit before completion.",
        ],
        actions: &["Review and adjust the ˝infer_timeout˝ INFER option."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_INFER_SIZE_LIMIT,
        symbol: "W_INFER_SIZE_LIMIT",
        description: "Stopped after exceeding max_schema_MB. Schema may be incomplete.",
        reasons: &[
            "The data produced by an INFER statement reached the size limit specified before completion.",
        ],
        actions: &["Review and adjust the ˝max_schema_MB˝ INFER option."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_INFER_NO_DOCUMENTS,
        symbol: "E_INFER_NO_DOCUMENTS",
        description: "No documents found, unable to infer schema.",
        reasons: &[],
        actions: &["Limit INFER operations to keyspaces that contain data."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_CONNECT,
        symbol: "E_INFER_CONNECT",
        description: "Failed to connect to the server.",
        reasons: &[
            "The stand-alone INFER tool failed to connect to the server for the reason given.",
        ],
        actions: &[],
        applies_to: &[INFER_TOOL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_GET_POOL,
        symbol: "E_INFER_GET_POOL",
        description: "Failed to access pool 'default'.",
        reasons: &[
            "The stand-alone INFER tool failed to access the default namespace for the reason given.",
        ],
        actions: &[],
        applies_to: &[INFER_TOOL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_GET_BUCKET,
        symbol: "E_INFER_GET_BUCKET",
        description: "Failed to access bucket.",
        reasons: &[
            "The stand-alone INFER tool failed to access the bucket for the reason given.",
        ],
        actions: &[],
        applies_to: &[INFER_TOOL],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_INFER_INDEX,
        symbol: "W_INFER_INDEX",
        description: "Index scanning only; document sample may not be representative.",
        reasons: &[
            "An INFER statement used only index access for document sampling and as these may not contain all keys, the sampling was only of a sub-set of the data.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: E_INFER_GET_RANDOM,
        symbol: "E_INFER_GET_RANDOM",
        description: "Failed to get random document.",
        reasons: &[
            "The random entry interface used by an INFER statement to sample documents failed.",
        ],
        actions: &[
            "Review the referenced error and take appropriate action if possible.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_RANDOM_SCAN,
        symbol: "E_INFER_NO_RANDOM_SCAN",
        description: "Keyspace does not support random key scans",
        reasons: &[
            "An INFER statement attempted to use a random scan to sample the data but this was not supported by the datastore.",
        ],
        actions: &[
            "Ensure flags permit other document sampling mechanisms to be tried.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_SEQUENTIAL_SCAN,
        symbol: "E_INFER_NO_SEQUENTIAL_SCAN",
        description: "Sequential scan not available.",
        reasons: &[
            "An INFER statement attempted to use a sequential scan to sample the data but no available scan mechanism was available in the data store.",
        ],
        actions: &[
            "Ensure flags permit other document sampling mechanisms to be tried.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NO_RETRIEVERS,
        symbol: "E_INFER_NO_RETRIEVERS",
        description: "No document retrievers available.",
        reasons: &[
            "An INFER statement's options, possibly combined with a lack of suitable indexes, meant that there was no document sampling mechanism available.",
        ],
        actions: &[
            "Ensure flags permit at least one supported document sampling mechanism and that any required indexes are available.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_OPTIONS,
        symbol: "E_INFER_OPTIONS",
        description: "Options must be provided",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFER_NEXT_DOCUMENT,
        symbol: "E_INFER_NEXT_DOCUMENT",
        description: "NextDocument failed",
        reasons: &[
            "An error occurred retrieving a document from a sub-query for an INFER statement.",
        ],
        actions: &[
            "Review the referenced error for appropriate actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_INFER_INVALID_FLAGS,
        symbol: "W_INFER_INVALID_FLAGS",
        description: "'flags' must be a number, a string or an array not: «type»",
        reasons: &[
            "An invalid value was passed as the INFER statement's ˝flags˝ option.",
        ],
        actions: &[
            "Revise the statement and provide a valid value for the option.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: W_INFER_INVALID_FLAG,
        symbol: "W_INFER_INVALID_FLAG",
        description: "'flags' array element «element» is invalid",
        reasons: &[
            "An invalid value included in the array passed as the INFER statement's ˝flags˝ option.",
        ],
        actions: &[
            "Revise the statement and provide a valid values in the array.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_MIGRATION,
        symbol: "E_MIGRATION",
        description: "Error occurred during «what» migration «details»",
        reasons: &[
            "An upgrade from an earlier version triggered migration of the component which encountered an error.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_MIGRATION_INTERNAL,
        symbol: "E_MIGRATION_INTERNAL",
        description: "Unexpected error occurred during «what» migration «details»",
        reasons: &[
            "An upgrade from an earlier version triggered migration of the component which encountered an error.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BACKUP_NOT_POSSIBLE,
        symbol: "E_BACKUP_NOT_POSSIBLE",
        description: "Metadata backup not possible.",
        reasons: &[
            "A backup has been attempted whilst metadata migration is underway.",
        ],
        actions: &[
            "Wait for the migration to complete before attempting to backup the Query node(s).",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_AUTHORIZATION,
        symbol: "E_DATASTORE_AUTHORIZATION",
        description: "Unable to authorize user.",
        reasons: &["Authorisation for the user failed with the indicated error."],
        actions: &[
            "Ensure the request is using the correct credentials and the user holds the permissions necessary for the request.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_FTS_MISSING_PORT_ERR,
        symbol: "E_FTS_MISSING_PORT_ERR",
        description: "Missing or Incorrect port in input url.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NODE_INFO_ACCESS_ERR,
        symbol: "E_NODE_INFO_ACCESS_ERR",
        description: "Issue with accessing node information for rest endpoint «endpoint»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NODE_SERVICE_ERR,
        symbol: "E_NODE_SERVICE_ERR",
        description: "No FTS node in server «server»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTIONS_NOT_SUPPORTED,
        symbol: "E_FUNCTIONS_NOT_SUPPORTED",
        description: "Functions of type «type» are only supported in Enterprise Edition.",
        reasons: &[],
        actions: &[],
        applies_to: &[COMMUNITY_EDITION],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MISSING_FUNCTION,
        symbol: "E_MISSING_FUNCTION",
        description: "Function «name» not found",
        reasons: &[
            "An attempt was made to drop the named function but it did not exist.",
        ],
        actions: &["Ensure the function exists before attempting to drop it."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_FUNCTION,
        symbol: "E_DUPLICATE_FUNCTION",
        description: "Function «name» already exists",
        reasons: &[
            "An attempt was made to create a function with a name that was already defined.",
        ],
        actions: &[
            "Use the OR REPLACE clause if the intention is to redefine the function.",
            "Change the function name to be unique.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INTERNAL_FUNCTION,
        symbol: "E_INTERNAL_FUNCTION",
        description: "Operation on function «name» encountered an unexpected error: «details».",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ARGUMENTS_MISMATCH,
        symbol: "E_ARGUMENTS_MISMATCH",
        description: "Incorrect number of arguments supplied to function «name»",
        reasons: &[],
        actions: &[
            "Revise the statement to include the correct number of arguments to the function.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_FUNCTION_NAME,
        symbol: "E_INVALID_FUNCTION_NAME",
        description: "Invalid function name «name»",
        reasons: &[
            "The namespace in the function name was invalid.",
            "The scope in the function name did not exist.",
            "The function name had an incorrect number of components.",
        ],
        actions: &["Revise the statement providing a valid function name."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTIONS_STORAGE,
        symbol: "E_FUNCTIONS_STORAGE",
        description: "Could not access function definition for «where» because «what»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTION_ENCODING,
        symbol: "E_FUNCTION_ENCODING",
        description: "Could not «operation» function definition for «function»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTIONS_DISABLED,
        symbol: "E_FUNCTIONS_DISABLED",
        description: "«type» functions are disabled.",
        reasons: &[
            "The cluster's feature control flags disable the type of functions.",
            "Problems with initialising the environment to run functions of the type prevent them being enabled.",
            "Restrictions in the cluster deployment model disable the type of functions.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTION_EXECUTION,
        symbol: "E_FUNCTION_EXECUTION",
        description: "Error executing function «name» «details»",
        reasons: &["The error noted occurred whilst executing the function."],
        actions: &[
            "Review the error for possible user actions and revise the statement and/or function as appropriate.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TOO_MANY_NESTED_FUNCTIONS,
        symbol: "E_TOO_MANY_NESTED_FUNCTIONS",
        description: "Error executing function: «name»: «num» nested javascript calls",
        reasons: &[
            "Function execution reached the maximum permitted number of nested calls and was halted.",
        ],
        actions: &[
            "Review your function code to ensure you don't have excess recursion.",
            "Review your functions, flattening where possible so as to not exceed the limit.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INNER_FUNCTION_EXECUTION,
        symbol: "E_INNER_FUNCTION_EXECUTION",
        description: "An error occurred executing an inner function.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_LIBRARY_PATH_ERROR,
        symbol: "E_LIBRARY_PATH_ERROR",
        description: "Invalid javascript library path: «path». Use a root level path, the same path as the function scope, or a local path ('./library')",
        reasons: &[
            "The path specified in a Javascript function creation statement was invalid.",
        ],
        actions: &[
            "Revise the statement providing a path valid for Javascript libraries.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTION_LOADING,
        symbol: "E_FUNCTION_LOADING",
        description: "Error loading function «name»",
        reasons: &[
            "An error occurred loading the body of a Javascript function.",
        ],
        actions: &[
            "Review the error referenced for appropriate actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTIONS_UNSUPPORTED_ACTION,
        symbol: "E_FUNCTIONS_UNSUPPORTED_ACTION",
        description: "«operation» is not supported for functions of type «type»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FUNCTION_STATEMENTS,
        symbol: "E_FUNCTION_STATEMENTS",
        description: "Error getting queries inside function «name». «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_INVALID_BUCKET_PARTS,
        symbol: "E_DATASTORE_INVALID_BUCKET_PARTS",
        description: "«entity» resolves to «path» - «num» path parts are expected",
        reasons: &[
            "A bucket path was expected but the provided information did not resolve to a two part path.",
            "A scope path was expected but the provided information did not resolve to a three part path.",
            "A collection path was expected but the provided information did not resolve to a four part path.",
            "A keyspace path was expected but the provided information did not resolve to a two or four part path.",
        ],
        actions: &[
            "Review the request's ˝query_context˝ setting.",
            "Revise the statement to provide a correct path.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_QUERY_CONTEXT,
        symbol: "E_QUERY_CONTEXT",
        description: "Invalid query_context specified: «details»",
        reasons: &[
            "The request's ˝query_context˝ contains the noted error.",
            "The request's ˝query_context˝ contains too many parts.",
        ],
        actions: &[
            "Correct the ˝query_context˝ value and try the request again.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_NO_DEFAULT_COLLECTION,
        symbol: "E_BUCKET_NO_DEFAULT_COLLECTION",
        description: "Bucket «name» does not have a default collection",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_DATASTORE,
        symbol: "E_NO_DATASTORE",
        description: "No datastore is available",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_MAX_ERRORS,
        symbol: "E_BUCKET_UPDATER_MAX_ERRORS",
        description: "Max failures reached. Last error: «error»",
        reasons: &[
            "The process responsible for synchronising changes to the bucket in the node encountered more failures than the maximum tolerated.",
            "The bucket was dropped outside of the node and the synchronisation endpoint was no longer available.",
        ],
        actions: &[
            "If the bucket was dropped this error is expected.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_NO_HEALTHY_NODES,
        symbol: "E_BUCKET_UPDATER_NO_HEALTHY_NODES",
        description: "No healthy nodes found.",
        reasons: &[
            "The process responsible for synchronising changes to the bucket was unable to find a healthy node on which to find the bucket.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_STREAM_ERROR,
        symbol: "E_BUCKET_UPDATER_STREAM_ERROR",
        description: "Streaming error",
        reasons: &[
            "The process responsible for synchronising changes to the bucket encountered an error reading the information stream from the orchestrator.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_AUTH_ERROR,
        symbol: "E_BUCKET_UPDATER_AUTH_ERROR",
        description: "Authentication error: «details»",
        reasons: &[
            "The process responsible for synchronising changes to the bucket failed to connect to the orchestrator.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_CONNECTION_FAILED,
        symbol: "E_BUCKET_UPDATER_CONNECTION_FAILED",
        description: "Failed to connect to host.",
        reasons: &[
            "The process responsible for synchronising changes to the bucket failed to connect to the orchestrator.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_ERROR_MAPPING,
        symbol: "E_BUCKET_UPDATER_ERROR_MAPPING",
        description: "Mapping error: «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_BUCKET_UPDATER_EP_NOT_FOUND,
        symbol: "E_BUCKET_UPDATER_EP_NOT_FOUND",
        description: "Streaming endpoint not found",
        reasons: &[
            "The process responsible for synchronising changes to the bucket in the node was unable to find the orchestrator endpoint for the bucket.",
            "The bucket was dropped outside of the node and the synchronisation endpoint was no longer available.",
        ],
        actions: &[
            "If the bucket was dropped this error is expected.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_SESSION_NOT_FOUND,
        symbol: "E_ADVISOR_SESSION_NOT_FOUND",
        description: "Advisor: Session not found.",
        reasons: &[
            "An advisor function call was made with the action as ˝stop˝ and an unknown session specified.",
        ],
        actions: &[
            "Verify the correct session is specified when stopping an index advisor session.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_INVALID_ACTION,
        symbol: "E_ADVISOR_INVALID_ACTION",
        description: "Advisor: Invalid value for 'action",
        reasons: &[
            "An advisor function call was made with an invalid value for the ˝action˝ field.",
        ],
        actions: &[
            "Refer to the documentation for valid values to pass to the advisor function.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_ACTION_MISSING,
        symbol: "E_ADVISOR_ACTION_MISSING",
        description: "Advisor: missing argument for 'action",
        reasons: &[
            "An advisor function call was made with an object argument that was missing the ˝action˝ field.",
        ],
        actions: &[
            "Refer to the documentation for valid arguments to pass to the advisor function.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_ADVISOR_INVALID_ARGS,
        symbol: "E_ADVISOR_INVALID_ARGS",
        description: "Advisor: Invalid arguments.",
        reasons: &["An advisor function call was made with invalid arguments."],
        actions: &[
            "Refer to the documentation for valid arguments to pass to the advisor function.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_FUNC_INVALID_METRIC,
        symbol: "E_VECTOR_FUNC_INVALID_METRIC",
        description: "Vector function <<name>> has invalid metric specification (<<metric>>).",
        reasons: &[
            "An invalid metric specification (<<metric>>) is used in vector function <<name>>.",
        ],
        actions: &[
            "Revise the vector function to use a supported metric specification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_VECTOR_FUNC_INVALID_FIELD,
        symbol: "E_VECTOR_FUNC_INVALID_FIELD",
        description: "Vector function <<name>> has invalid field specification (<<field>>).",
        reasons: &[
            "An invalid field specification (<<field>>) is used in vector function <<name>>.",
        ],
        actions: &[
            "Revise the vector function to use a valid field specification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_IS_VECTOR_INVALID_DIMENSION,
        symbol: "E_IS_VECTOR_INVALID_DIMENSION",
        description: "IsVector() function has invalid dimension specification (<<dimension>>).",
        reasons: &[
            "An invalid dimension specification (<<dimension>>) is used in IsVector() function.",
        ],
        actions: &[
            "Revise the function parameter to use an integer for dimension specification.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_IS_VECTOR_INVALID_ARG,
        symbol: "E_IS_VECTOR_INVALID_ARG",
        description: "IsVector() function has invalid argument (<<msg>>).",
        reasons: &[
            "An invalid argument (<<msg>>) is used in IsVector() function.",
        ],
        actions: &["Revise the function parameter to use a supported argument."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_DATASTORE,
        symbol: "E_SYSTEM_DATASTORE",
        description: "System datastore error «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_KEYSPACE_NOT_FOUND,
        symbol: "E_SYSTEM_KEYSPACE_NOT_FOUND",
        description: "Keyspace not found in system namespace",
        reasons: &[
            "A reference was made to a keyspace that doesn't exist in the system namespace.",
        ],
        actions: &[
            "Refer to the documentation for valid keyspaces in the system namespace.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_NOT_IMPLEMENTED,
        symbol: "E_SYSTEM_NOT_IMPLEMENTED",
        description: "System datastore :  Not implemented «what»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_NOT_SUPPORTED,
        symbol: "E_SYSTEM_NOT_SUPPORTED",
        description: "System datastore : Not supported «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_IDX_NOT_FOUND,
        symbol: "E_SYSTEM_IDX_NOT_FOUND",
        description: "System datastore : Index not found «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_IDX_NO_DROP,
        symbol: "E_SYSTEM_IDX_NO_DROP",
        description: "System datastore : This index cannot be dropped «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_STMT_NOT_FOUND,
        symbol: "E_SYSTEM_STMT_NOT_FOUND",
        description: "System datastore : Statement not found «details»",
        reasons: &[
            "An attempt was made to delete an unknown request from completed requests.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_SYSTEM_REMOTE,
        symbol: "W_SYSTEM_REMOTE",
        description: "System datastore : «details»",
        reasons: &["An operation on a remote node failed as detailed."],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: E_SYSTEM_UNABLE_TO_RETRIEVE,
        symbol: "E_SYSTEM_UNABLE_TO_RETRIEVE",
        description: "System datastore : unable to retrieve «what» from server",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_UNABLE_TO_UPDATE,
        symbol: "E_SYSTEM_UNABLE_TO_UPDATE",
        description: "System datastore : unable to update «what» information in server",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_SYSTEM_FILTERED_ROWS,
        symbol: "W_SYSTEM_FILTERED_ROWS",
        description: "One or more documents were excluded from the «namespace» bucket because of insufficient user permissions. In an EE system, add the query_system_catalog role to see all rows. In a CE system, add the administrator role to see all rows.",
        reasons: &[
            "The request attempted to access the contents of a restricted access system keyspace and the user was not permitted to see all data.",
        ],
        actions: &[
            "Ensure the request is run as a user with the correct privileges.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_SYSTEM_MALFORMED_KEY,
        symbol: "E_SYSTEM_MALFORMED_KEY",
        description: "System datastore : key «key» is not of the correct format for keyspace «keyspace»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_NO_BUCKETS,
        symbol: "E_SYSTEM_NO_BUCKETS",
        description: "The system namespace contains no buckets that contain scopes.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_SYSTEM_REMOTE_NODE_NOT_FOUND,
        symbol: "W_SYSTEM_REMOTE_NODE_NOT_FOUND",
        description: "Node «node» not found",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: E_CB_CONNECTION,
        symbol: "E_CB_CONNECTION",
        description: "Cannot connect «details»",
        reasons: &[
            "On start-up the Query service was unable to connect to the authorisation service.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_NAMESPACE_NOT_FOUND,
        symbol: "E_CB_NAMESPACE_NOT_FOUND",
        description: "Namespace not found in CB datastore: «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_KEYSPACE_NOT_FOUND,
        symbol: "E_CB_KEYSPACE_NOT_FOUND",
        description: "Keyspace not found in CB datastore: «details»",
        reasons: &["A keyspace referenced in the statement did not exist."],
        actions: &[
            "Check all expected keyspaces have been created and are correctly referenced in the statement.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_PRIMARY_INDEX_NOT_FOUND,
        symbol: "E_CB_PRIMARY_INDEX_NOT_FOUND",
        description: "Primary Index not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_INDEXER_NOT_IMPLEMENTED,
        symbol: "E_CB_INDEXER_NOT_IMPLEMENTED",
        description: "Indexer not implemented «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_KEYSPACE_COUNT,
        symbol: "E_CB_KEYSPACE_COUNT",
        description: "Failed to get count for keyspace «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BULK_GET,
        symbol: "E_CB_BULK_GET",
        description: "Error performing bulk get operation «details»",
        reasons: &[
            "An error occurred retrieving documents from the data service.",
        ],
        actions: &[
            "Review the error detailed for possible user actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_DML,
        symbol: "E_CB_DML",
        description: "DML Error, possible causes include «reason»",
        reasons: &[
            "An attempt was made to update a document but it was concurrently updated by another request.",
        ],
        actions: &[
            "Review concurrent document update logic and retry the operation as appropriate.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_DELETE_FAILED,
        symbol: "E_CB_DELETE_FAILED",
        description: "Failed to perform «operation» on key «key»",
        reasons: &["A request to the data service to delete a key failed."],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_LOAD_INDEXES,
        symbol: "E_CB_LOAD_INDEXES",
        description: "Failed to load indexes «indexes»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_TYPE_NOT_SUPPORTED,
        symbol: "E_CB_BUCKET_TYPE_NOT_SUPPORTED",
        description: "This bucket type is not supported «details»",
        reasons: &[
            "An attempt was made to access a bucket of an an unsupported type through the Query service.",
        ],
        actions: &["Migrate all buckets to currently supported types."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_INDEX_SCAN_TIMEOUT,
        symbol: "E_CB_INDEX_SCAN_TIMEOUT",
        description: "Index scan timed out",
        reasons: &[
            "The maximum time for a primary index scan was reached before producing any keys.",
        ],
        actions: &[
            "Review the state and performance of the indexing nodes in the cluster.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_INDEX_NOT_FOUND,
        symbol: "E_CB_INDEX_NOT_FOUND",
        description: "Index Not Found",
        reasons: &[
            "An attempt was made to alter or drop an index that didn't exist.",
        ],
        actions: &[
            "Check the index exists before attempting to alter or drop it.",
            "Check for a concurrent deletion of the index.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_GET_RANDOM_ENTRY,
        symbol: "E_CB_GET_RANDOM_ENTRY",
        description: "Error getting random entry from keyspace",
        reasons: &[
            "An attempt to retrieve a document using the random document interface failed.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_UNABLE_TO_INIT_CB_AUTH,
        symbol: "E_UNABLE_TO_INIT_CB_AUTH",
        description: "Unable to initialize authorization system as required",
        reasons: &[
            "The authorisation service was not initialised but is required by the datastore.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUDIT_STREAM_HANDLER_FAILED,
        symbol: "E_AUDIT_STREAM_HANDLER_FAILED",
        description: "Audit stream handler failed",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_NOT_FOUND,
        symbol: "E_CB_BUCKET_NOT_FOUND",
        description: "Bucket not found in CB datastore «bucket»",
        reasons: &[
            "An attempt was made to alter or drop a bucket that did not exist.",
        ],
        actions: &["Review the statement and ensure buckets exist beforehand."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_SCOPE_NOT_FOUND,
        symbol: "E_CB_SCOPE_NOT_FOUND",
        description: "Scope not found in CB datastore «scope»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_KEYSPACE_SIZE,
        symbol: "E_CB_KEYSPACE_SIZE",
        description: "Failed to get size for keyspace «details»",
        reasons: &[
            "An error was encountered acquiring the bucket statistics from the data service.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_SECURITY_CONFIG_NOT_PROVIDED,
        symbol: "E_CB_SECURITY_CONFIG_NOT_PROVIDED",
        description: "Connection security config not provided. Unable to load bucket «bucket»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_CREATE_SYSTEM_BUCKET,
        symbol: "E_CB_CREATE_SYSTEM_BUCKET",
        description: "Error while creating system bucket «details»",
        reasons: &[
            "Creation of the N1QL_SYSTEM_BUCKET used for storing statistics for query planning failed.",
        ],
        actions: &[
            "Review the error detailed for possible user actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_CREATE_SCOPE,
        symbol: "E_CB_BUCKET_CREATE_SCOPE",
        description: "Error while creating scope «details»",
        reasons: &[
            "An attempt was made to create a scope with a name that already existed.",
        ],
        actions: &[
            "Review the statement and ensure scope names are unique within the bucket.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_DROP_SCOPE,
        symbol: "E_CB_BUCKET_DROP_SCOPE",
        description: "Error while dropping scope «details»",
        reasons: &[
            "An attempt was made to create a scope with a name that did not exist.",
        ],
        actions: &["Review the statement and ensure scopes exist beforehand."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_CREATE_COLLECTION,
        symbol: "E_CB_BUCKET_CREATE_COLLECTION",
        description: "Error while creating collection «name»",
        reasons: &[
            "Invalid options were passed in a CREATE COLLECTION statement.",
            "An invalid value was passed for the ˝maxTTL˝ option in a CREATE COLLECTION statement.",
        ],
        actions: &["Revise the statement to provide a valid options."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_DROP_COLLECTION,
        symbol: "E_CB_BUCKET_DROP_COLLECTION",
        description: "Error while dropping collection «details»",
        reasons: &[
            "An attempt was made to drop a collection that did not exist.",
        ],
        actions: &[
            "Review the statement and ensure collections exist beforehand.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_FLUSH_COLLECTION,
        symbol: "E_CB_BUCKET_FLUSH_COLLECTION",
        description: "Error while flushing collection «name»",
        reasons: &[
            "An attempt was made to flush a collection but it encountered an error.",
        ],
        actions: &[
            "Review the error detailed for possible user actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_BINARY_DOCUMENT_MUTATION,
        symbol: "E_BINARY_DOCUMENT_MUTATION",
        description: "«operation» of binary document is not supported",
        reasons: &["An attempt was made to operate on a binary document."],
        actions: &[
            "Revise the statement to ensure only JSON documents are included.",
            "Check the collection contains documents of the expected format.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DURABILITY_NOT_SUPPORTED,
        symbol: "E_DURABILITY_NOT_SUPPORTED",
        description: "Durability is not supported.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_PRESERVE_EXPIRY_NOT_SUPPORTED,
        symbol: "E_PRESERVE_EXPIRY_NOT_SUPPORTED",
        description: "Preserve expiration is not supported.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CAS_MISMATCH,
        symbol: "E_CAS_MISMATCH",
        description: "CAS mismatch",
        reasons: &["A concurrent update of a document was detected."],
        actions: &["Retry the operation."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DML_MC,
        symbol: "E_DML_MC",
        description: "MC error «details»",
        reasons: &["A data service operation failed."],
        actions: &[
            "Review the error for possible user actions.",
            "Retry the request if appropriate.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_NOT_PRIMARY_INDEX,
        symbol: "E_CB_NOT_PRIMARY_INDEX",
        description: "Index «name» exists but is not a primary index",
        reasons: &[
            "A DROP PRIMARY INDEX indicated a specific index but that index was not a primary index.",
        ],
        actions: &[
            "Review the statement and use the PRIMARY qualifier only when dropping a primary index.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DML_INSERT,
        symbol: "E_DML_INSERT",
        description: "Error in INSERT of key: «key»",
        reasons: &["A data service error occurred whilst adding a document."],
        actions: &[
            "Review the error for possible user actions.",
            "Retry the request if appropriate.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ACCESS_DENIED,
        symbol: "E_ACCESS_DENIED",
        description: "User does not have access to «entity»",
        reasons: &[
            "An attempt was made to access a bucket the user does not have access too.",
        ],
        actions: &["Review the request and bucket access requirements."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_WITH_INVALID_OPTION,
        symbol: "E_WITH_INVALID_OPTION",
        description: "Invalid option «option»",
        reasons: &[
            "An invalid option was specified in a create or alter bucket statement.",
            "An invalid option was specified in a create or alter sequence statement.",
        ],
        actions: &["Review the statement and correct the options passed."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_WITH_INVALID_TYPE,
        symbol: "E_WITH_INVALID_TYPE",
        description: "Invalid value for «option»",
        reasons: &[
            "An invalid option value was specified in a create or alter bucket statement.",
            "An invalid option value was specified in a create or alter sequence statement.",
            "A non-integer value was specified for the ˝maxTTL˝ option in a create collection statement.",
        ],
        actions: &["Review the statement and correct the options passed."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_COMPRESSED_VALUE,
        symbol: "E_INVALID_COMPRESSED_VALUE",
        description: "Invalid compressed document received from datastore",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_CLOSED,
        symbol: "E_CB_BUCKET_CLOSED",
        description: "Bucket is closed: «message»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_SUBDOC_GET,
        symbol: "E_CB_SUBDOC_GET",
        description: "Sub-doc get operation failed",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_SUBDOC_SET,
        symbol: "E_CB_SUBDOC_SET",
        description: "Sub-doc set operation failed",
        reasons: &["A sub-document update of a sequence document failed."],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_DROP_SYSTEM_BUCKET,
        symbol: "E_CB_DROP_SYSTEM_BUCKET",
        description: "Error while dropping system bucket «details»",
        reasons: &[
            "An error occurred dropping the system bucket ˝N1QL_SYSTEM_BUCKET˝.",
        ],
        actions: &[
            "Review the error detailed for possible user actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_CB_BUCKET_EXISTS,
        symbol: "E_CB_BUCKET_EXISTS",
        description: "Bucket «bucket» already exists.",
        reasons: &[
            "A CREATE BUCKET statement attempted to create a bucket that already existed.",
        ],
        actions: &["Review the statement and ensure bucket names are unique."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_INDEXER_VERSION,
        symbol: "E_INDEXER_VERSION",
        description: "All indexer nodes must be version <<ver>> or later (<<cause>>).",
        reasons: &[
            "An indexer with version lower than <<ver>> is found, cannot support '<<cause>>'.",
        ],
        actions: &["Upgrade all indexer nodes to be at least version <<ver>>."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_CB_SYS_COLLECTION_PRIMARY_INDEX,
        symbol: "E_CB_SYS_COLLECTION_PRIMARY_INDEX",
        description: "Primary index on system collection not available for bucket «bucket»",
        reasons: &[
            "Primary index on system collection for bucket <<bucket>> is taking longer than expected to be created.",
        ],
        actions: &[
            "Retry action.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_CLUSTER,
        symbol: "E_DATASTORE_CLUSTER",
        description: "Error retrieving cluster «what»",
        reasons: &[
            "An error occurred obtaining the cluster information from the orchestrator.",
        ],
        actions: &[
            "Review the cluster state and diagnostic logs.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_UNABLE_TO_RETRIEVE_ROLES,
        symbol: "E_DATASTORE_UNABLE_TO_RETRIEVE_ROLES",
        description: "Unable to retrieve roles from server.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_INSUFFICIENT_CREDENTIALS,
        symbol: "E_DATASTORE_INSUFFICIENT_CREDENTIALS",
        description: "User does not have credentials to «action». Add role «role»  to allow the statement to run.",
        reasons: &[],
        actions: &[
            "Submit the request as a user with the necessary privileges.",
            "Review the user's privileges.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_UNABLE_TO_RETRIEVE_BUCKETS,
        symbol: "E_DATASTORE_UNABLE_TO_RETRIEVE_BUCKETS",
        description: "Unable to retrieve buckets from server.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_NO_ADMIN,
        symbol: "E_DATASTORE_NO_ADMIN",
        description: "Unable to determine admin credentials",
        reasons: &[
            "The indicated error occurred obtaining the correct cluster administration credentials.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_NOT_SET,
        symbol: "E_DATASTORE_NOT_SET",
        description: "Datastore not set",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DATASTORE_INVALID_URI,
        symbol: "E_DATASTORE_INVALID_URI",
        description: "Invalid datastore uri: «uri»",
        reasons: &[
            "The datastore URI received from the orchestrator was invalid.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INDEX_SCAN_SIZE,
        symbol: "E_INDEX_SCAN_SIZE",
        description: "Unacceptable size for index scan: «size»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_DATASTORE,
        symbol: "E_FILE_DATASTORE",
        description: "Error in file datastore «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_NAMESPACE_NOT_FOUND,
        symbol: "E_FILE_NAMESPACE_NOT_FOUND",
        description: "Namespace not found in file store «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_KEYSPACE_NOT_FOUND,
        symbol: "E_FILE_KEYSPACE_NOT_FOUND",
        description: "Keyspace not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_DUPLICATE_NAMESPACE,
        symbol: "E_FILE_DUPLICATE_NAMESPACE",
        description: "Duplicate Namespace «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_DUPLICATE_KEYSPACE,
        symbol: "E_FILE_DUPLICATE_KEYSPACE",
        description: "Duplicate Keyspace «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_NO_KEYS_INSERT,
        symbol: "E_FILE_NO_KEYS_INSERT",
        description: "No keys to insert «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_KEY_EXISTS,
        symbol: "E_FILE_KEY_EXISTS",
        description: "Key Exists «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_DML,
        symbol: "E_FILE_DML",
        description: "DML Error «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_KEYSPACE_NOT_DIR,
        symbol: "E_FILE_KEYSPACE_NOT_DIR",
        description: "Keyspace path must be a directory «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_IDX_NOT_FOUND,
        symbol: "E_FILE_IDX_NOT_FOUND",
        description: "Index not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_NOT_SUPPORTED,
        symbol: "E_FILE_NOT_SUPPORTED",
        description: "Operation not supported «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_FILE_PRIMARY_IDX_NO_DROP,
        symbol: "E_FILE_PRIMARY_IDX_NO_DROP",
        description: "Primary Index cannot be dropped «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_DATASTORE,
        symbol: "E_OTHER_DATASTORE",
        description: "Error in datastore «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_NAMESPACE_NOT_FOUND,
        symbol: "E_OTHER_NAMESPACE_NOT_FOUND",
        description: "Namespace Not Found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_KEYSPACE_NOT_FOUND,
        symbol: "E_OTHER_KEYSPACE_NOT_FOUND",
        description: "Keyspace Not Found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_NOT_IMPLEMENTED,
        symbol: "E_OTHER_NOT_IMPLEMENTED",
        description: "Not Implemented «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_IDX_NOT_FOUND,
        symbol: "E_OTHER_IDX_NOT_FOUND",
        description: "Index not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_IDX_NO_DROP,
        symbol: "E_OTHER_IDX_NO_DROP",
        description: "Index Cannot be dropped «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_NOT_SUPPORTED,
        symbol: "E_OTHER_NOT_SUPPORTED",
        description: "Not supported for this datastore «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_KEY_NOT_FOUND,
        symbol: "E_OTHER_KEY_NOT_FOUND",
        description: "Key not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INFERENCER_NOT_FOUND,
        symbol: "E_INFERENCER_NOT_FOUND",
        description: "Inferencer not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_OTHER_NO_BUCKETS,
        symbol: "E_OTHER_NO_BUCKETS",
        description: "Datastore «name» contains no buckets that contain scopes.",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SCOPES_NOT_SUPPORTED,
        symbol: "E_SCOPES_NOT_SUPPORTED",
        description: "Keyspace does not support scopes: «scopes»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_STAT_UPDATER_NOT_FOUND,
        symbol: "E_STAT_UPDATER_NOT_FOUND",
        description: "StatUpdater not found",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_FLUSH,
        symbol: "E_NO_FLUSH",
        description: "Keyspace does not support flush: «keyspace»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_IDX_NOT_FOUND,
        symbol: "E_SS_IDX_NOT_FOUND",
        description: "Index not found",
        reasons: &[
            "Sequential scans were disabled using the feature control flags.",
        ],
        actions: &[
            "If desired, revise the feature control flags to enable sequential scans.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_NOT_SUPPORTED,
        symbol: "E_SS_NOT_SUPPORTED",
        description: "«operation» not supported for scan",
        reasons: &[
            "The sequential scan indexer does not support index management and maintenance operations.",
            "A sequential scan doesn't support aggregate operations.",
        ],
        actions: &[
            "Don't attempt index management & maintenance statements using the sequential scan indexer.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SS_INACTIVE,
        symbol: "E_SS_INACTIVE",
        description: "Inactive scan in Fetch",
        reasons: &[],
        actions: &["Contact Support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_INVALID,
        symbol: "E_SS_INVALID",
        description: "Invalid scan in «operation»",
        reasons: &[],
        actions: &["Contact Support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_CONTINUE,
        symbol: "E_SS_CONTINUE",
        description: "Scan continuation failed",
        reasons: &["A KV range scan operation could not be continued."],
        actions: &["Contact Support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_CREATE,
        symbol: "E_SS_CREATE",
        description: "Scan creation failed",
        reasons: &[
            "A KV range scan operation could not be created to support a sequential scan.",
        ],
        actions: &[
            "Review the associated error for appropriate actions.",
            "Consider creating an index to avoid the sequential scan.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_CANCEL,
        symbol: "E_SS_CANCEL",
        description: "Scan cancellation failed",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_TIMEOUT,
        symbol: "E_SS_TIMEOUT",
        description: "Scan exceeded permitted duration",
        reasons: &[
            "A sequential scan operation did not complete within the permitted time.",
        ],
        actions: &[
            "Review the request ˝timeout˝ parameter.",
            "Review any associated error for appropriate actions.",
            "Review cluster availability and load.",
            "Confirm end client is consuming results produced by the Query service in a timely manner.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_SS_CID_GET,
        symbol: "E_SS_CID_GET",
        description: "Failed to get collection ID for scan",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_CONN,
        symbol: "E_SS_CONN",
        description: "Failed to get connection for scan",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_FETCH_WAIT_TIMEOUT,
        symbol: "E_SS_FETCH_WAIT_TIMEOUT",
        description: "Timed out polling scan for data",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_WORKER_ABORT,
        symbol: "E_SS_WORKER_ABORT",
        description: "A fatal error occurred in scan processing",
        reasons: &[],
        actions: &["Contact support"],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_FAILED,
        symbol: "E_SS_FAILED",
        description: "Scan failed",
        reasons: &[
            "The v-bucket map available to a sequential scan was incomplete or contained errors.",
        ],
        actions: &[
            "Review concurrent cluster management operations.",
            "Review the diagnostic logs for further information.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_SPILL,
        symbol: "E_SS_SPILL",
        description: "Operation failed on scan spill file",
        reasons: &[
            "A sorted sequential scan needed to spill data to disk temporarily but could not do so.",
        ],
        actions: &[
            "Review the Query service temporary data directory and validate the filesystem is in good order with sufficient space to support the node's temporary data requirements.",
            "Contact support",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_VALIDATE,
        symbol: "E_SS_VALIDATE",
        description: "Failed to validate document key",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SS_BAD_RESPONSE,
        symbol: "E_SS_BAD_RESPONSE",
        description: "Invalid scan response received",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRAN_DATASTORE_NOT_SUPPORTED,
        symbol: "E_TRAN_DATASTORE_NOT_SUPPORTED",
        description: "Transactions are not supported on «type» store",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRAN_STATEMENT_NOT_SUPPORTED,
        symbol: "E_TRAN_STATEMENT_NOT_SUPPORTED",
        description: "«statement» statement is not supported «qualifier» transaction",
        reasons: &[
            "A statement was issued to start a transaction whilst already in a transaction.",
            "A statement was issued to end or modify a transaction whilst not in a transaction.",
        ],
        actions: &["Review the application's order of operations."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRAN_FUNCTION_NOT_SUPPORTED,
        symbol: "E_TRAN_FUNCTION_NOT_SUPPORTED",
        description: "advisor function is not supported within the transaction",
        reasons: &[
            "An attempt was made to use the advisor function whilst in a transaction.",
        ],
        actions: &["Review the application's order of operations."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_CONTEXT,
        symbol: "E_TRANSACTION_CONTEXT",
        description: "Transaction context error",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRAN_STATEMENT_OUT_OF_ORDER,
        symbol: "E_TRAN_STATEMENT_OUT_OF_ORDER",
        description: "Transaction statement is out of order",
        reasons: &[
            "A request was attempted with a value for the ˝txstmtnum˝ that was not in relative order within the transaction.",
        ],
        actions: &[
            "Review the application logic to ensure a correctly ordered ˝txstmtnum˝.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_START_TRANSACTION,
        symbol: "E_START_TRANSACTION",
        description: "Start Transaction statement error «details»",
        reasons: &[],
        actions: &[
            "Review the included details for appropriate actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_COMMIT_TRANSACTION,
        symbol: "E_COMMIT_TRANSACTION",
        description: "Commit Transaction statement error «details»",
        reasons: &[],
        actions: &[
            "Review the included details for appropriate actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_ROLLBACK_TRANSACTION,
        symbol: "E_ROLLBACK_TRANSACTION",
        description: "Rollback Transaction statement error «details»",
        reasons: &[],
        actions: &[
            "Review the included details for appropriate actions.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NO_SAVEPOINT,
        symbol: "E_NO_SAVEPOINT",
        description: "«name» savepoint is not defined",
        reasons: &[
            "A save point referenced in a transaction rollback statement did not exist.",
        ],
        actions: &[
            "Review the application's order of operations.",
            "Ensure the a valid save point name is used.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_EXPIRED,
        symbol: "E_TRANSACTION_EXPIRED",
        description: "Transaction timeout",
        reasons: &[
            "A transaction was active for longer than the permitted maximum time.",
        ],
        actions: &[
            "Review the operations in the transaction ensuring they can be completed within the time limit.",
            "Review the transaction time limit setting.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_RELEASED,
        symbol: "E_TRANSACTION_RELEASED",
        description: "Transaction is released",
        reasons: &[
            "An attempt was made to access a transaction that had been released.",
        ],
        actions: &[
            "Review other errors raised during the transaction for possible actions.",
            "Review the application's order of operations.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_DUPLICATE_KEY,
        symbol: "E_DUPLICATE_KEY",
        description: "Duplicate Key «details»",
        reasons: &["A key in an insert statement already existed."],
        actions: &[
            "Ensure uniqueness of document keys.",
            "Review concurrent activity that may lead to duplicates.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_INUSE,
        symbol: "E_TRANSACTION_INUSE",
        description: "Parallel execution of the statements are not allowed within the transaction",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_KEY_NOT_FOUND,
        symbol: "E_KEY_NOT_FOUND",
        description: "Key not found",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SCAS_MISMATCH,
        symbol: "E_SCAS_MISMATCH",
        description: "«op» cas (actual: «actual», expected:«expected») mismatch for key: «key»",
        reasons: &[
            "The operation encountered a check-and-set value mismatch for the noted key.\nThis indicates another update was successful between the document being read and this update operation.",
        ],
        actions: &["Review the transaction operations and concurrent activity."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_MEMORY_QUOTA_EXCEEDED,
        symbol: "E_TRANSACTION_MEMORY_QUOTA_EXCEEDED",
        description: "Transaction memory («used») exceeded quota («quota»)",
        reasons: &[],
        actions: &["Review the transaction operations and quota setting."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_FETCH,
        symbol: "E_TRANSACTION_FETCH",
        description: "Transaction fetch error",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_POST_COMMIT_TRANSACTION,
        symbol: "E_POST_COMMIT_TRANSACTION",
        description: "Failed post commit",
        reasons: &[
            "A transaction failed during post commit operations for the given reason",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AMBIGUOUS_COMMIT_TRANSACTION,
        symbol: "E_AMBIGUOUS_COMMIT_TRANSACTION",
        description: "Commit was ambiguous",
        reasons: &[
            "A transaction commit operation could not be completed ensuring a consistent, precise outcome.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_STAGING,
        symbol: "E_TRANSACTION_STAGING",
        description: "Transaction staging error",
        reasons: &["The staging of a write for a transaction failed."],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION_QUEUE_FULL,
        symbol: "E_TRANSACTION_QUEUE_FULL",
        description: "Transaction queue is full",
        reasons: &[
            "Another request for the transaction was executing and server could not queue any more transaction requests when this request was received.",
        ],
        actions: &[
            "Revise the concurrent requests submitted for a single transaction.",
            "Review the duration of requests in the transaction.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: W_POST_COMMIT_TRANSACTION,
        symbol: "W_POST_COMMIT_TRANSACTION",
        description: "Failed post commit",
        reasons: &[
            "A transaction failed during post commit operations for the given reason",
        ],
        actions: &["Review the details for possible user action."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: true,
    },
    EntrySeed {
        code: E_TRANSACTION_XATTRS,
        symbol: "E_TRANSACTION_XATTRS",
        description: "XATTRs not permitted in a transaction",
        reasons: &["Document XATTRs may not be used in a transaction."],
        actions: &[
            "Confirm OPTIONS for INSERT/UPSERT do not specify XATTRs.",
            "Remove XATTRs from the statement and re-submit.",
            "Submit the statement outside of a transaction.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_GC_AGENT,
        symbol: "E_GC_AGENT",
        description: "GC agent error",
        reasons: &[
            "An agent handling the transaction encountered an error during the noted operation.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRAN_CE_NOTSUPPORTED,
        symbol: "E_TRAN_CE_NOTSUPPORTED",
        description: "Transactions are not supported in Community Edition",
        reasons: &[
            "A transaction operation was attempted in a Community Edition server.",
        ],
        actions: &[],
        applies_to: &[COMMUNITY_EDITION],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_MEMORY_ALLOCATION,
        symbol: "E_MEMORY_ALLOCATION",
        description: "Memory allocation error: «details»",
        reasons: &[
            "An internal memory pool used for transactions was exhausted.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_TRANSACTION,
        symbol: "E_TRANSACTION",
        description: "A transaction error occurred",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DICT_INTERNAL,
        symbol: "E_DICT_INTERNAL",
        description: "Unexpected error in dictionary: «error»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_GSI_INDEXER,
        symbol: "E_INVALID_GSI_INDEXER",
        description: "GSI Indexer does not support collections - «reason»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_INVALID_GSI_INDEX,
        symbol: "E_INVALID_GSI_INDEX",
        description: "GSI Index «name» does not support collections",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SYSTEM_COLLECTION,
        symbol: "E_SYSTEM_COLLECTION",
        description: "Error accessing system collection - «details»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DICTIONARY_ENCODING,
        symbol: "E_DICTIONARY_ENCODING",
        description: "Cound not «what» data dictionary entry for «name» due to «reason»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DICT_KEYSPACE_MISMATCH,
        symbol: "E_DICT_KEYSPACE_MISMATCH",
        description: "Decoded dictionary entry for keyspace «keyspace» does not match «keyspace»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_DICT_MISSING_FIELD,
        symbol: "E_DICT_MISSING_FIELD",
        description: "Dictionary entry «entry» for <<name>> is missing field <<field>>",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_KS_NOT_SUPPORTED,
        symbol: "E_VIRTUAL_KS_NOT_SUPPORTED",
        description: "Virtual Keyspace : Not supported «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_KS_NOT_IMPLEMENTED,
        symbol: "E_VIRTUAL_KS_NOT_IMPLEMENTED",
        description: "Virtual Keyspace : Not yet implemented «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_KS_IDXER_NOT_FOUND,
        symbol: "E_VIRTUAL_KS_IDXER_NOT_FOUND",
        description: "Virtual keyspace : Indexer not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_IDX_NOT_FOUND,
        symbol: "E_VIRTUAL_IDX_NOT_FOUND",
        description: "Virtual indexer : Index not found «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_IDXER_NOT_SUPPORTED,
        symbol: "E_VIRTUAL_IDXER_NOT_SUPPORTED",
        description: "Virtual Indexer : Not supported «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_IDX_NOT_IMPLEMENTED,
        symbol: "E_VIRTUAL_IDX_NOT_IMPLEMENTED",
        description: "Virtual index : Not yet implemented «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_IDX_NOT_SUPPORTED,
        symbol: "E_VIRTUAL_IDX_NOT_SUPPORTED",
        description: "Virtual Index : Not supported «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_SCOPE_NOT_FOUND,
        symbol: "E_VIRTUAL_SCOPE_NOT_FOUND",
        description: "Scope not found in virtual datastore «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_BUCKET_CREATE_SCOPE,
        symbol: "E_VIRTUAL_BUCKET_CREATE_SCOPE",
        description: "Error while creating scope «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_BUCKET_DROP_SCOPE,
        symbol: "E_VIRTUAL_BUCKET_DROP_SCOPE",
        description: "Error while dropping scope «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_KEYSPACE_NOT_FOUND,
        symbol: "E_VIRTUAL_KEYSPACE_NOT_FOUND",
        description: "Keyspace not found in CB datastore: «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_BUCKET_CREATE_COLLECTION,
        symbol: "E_VIRTUAL_BUCKET_CREATE_COLLECTION",
        description: "Error while creating collection «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_VIRTUAL_BUCKET_DROP_COLLECTION,
        symbol: "E_VIRTUAL_BUCKET_DROP_COLLECTION",
        description: "Error while dropping collection «details»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_NOT_ENABLED,
        symbol: "E_SEQUENCE_NOT_ENABLED",
        description: "Sequence support is not enabled for «bucket»",
        reasons: &[
            "An attempt was made to define a sequence in a bucket that lacks a system collection.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_CREATE,
        symbol: "E_SEQUENCE_CREATE",
        description: "Create failed for sequence «name»",
        reasons: &[
            "Invalid options were specified in a CREATE SEQUENCE statement.",
            "An error occurred storing the sequence information in the system collection.",
        ],
        actions: &[
            "Correct the sequence options according to the referenced error.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_ALTER,
        symbol: "E_SEQUENCE_ALTER",
        description: "Alter failed for sequence «name»",
        reasons: &[
            "Invalid options were specified in an ALTER SEQUENCE statement.",
            "An error occurred storing the sequence information in the system collection.",
        ],
        actions: &[
            "Correct the sequence options according to the referenced error.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_DROP,
        symbol: "E_SEQUENCE_DROP",
        description: "Drop failed for sequence «name»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_INVALID_RANGE,
        symbol: "E_SEQUENCE_INVALID_RANGE",
        description: "Invalid range «min»-«max»",
        reasons: &["The range specified in the sequence options was invalid."],
        actions: &["Review the statement and correct the range specification."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_INVALID_CACHE,
        symbol: "E_SEQUENCE_INVALID_CACHE",
        description: "Invalid cache value «value»",
        reasons: &["A sequence cache value less than one was specified."],
        actions: &["Review the statement and correct the cache specification."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_NOT_FOUND,
        symbol: "E_SEQUENCE_NOT_FOUND",
        description: "Sequence «name» not found",
        reasons: &[],
        actions: &[
            "Review the statement ensuring the correct sequence is referenced and that it exists.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE,
        symbol: "E_SEQUENCE",
        description: "Error accessing sequence",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_ALREADY_EXISTS,
        symbol: "E_SEQUENCE_ALREADY_EXISTS",
        description: "Sequence «name» already exists ",
        reasons: &[
            "An attempt was made to create a sequence with the same name as an existing sequence.",
        ],
        actions: &[
            "Review the statement ensuring a unique name is used.",
            "Revise the statement to include the IF NOT EXISTS syntax.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_METAKV,
        symbol: "E_SEQUENCE_METAKV",
        description: "Error accessing sequences cache monitor data",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_INVALID_DATA,
        symbol: "E_SEQUENCE_INVALID_DATA",
        description: "Invalid sequence data",
        reasons: &["The persisted data for a sequence was invalid."],
        actions: &[
            "Ensure no user activity has directly altered any data in the system collection.",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_EXHAUSTED,
        symbol: "E_SEQUENCE_EXHAUSTED",
        description: "Sequence «name» has reached its limit",
        reasons: &[
            "A sequence was defined to not cycle and was unable to generate further values having reached its defined limit.",
        ],
        actions: &[
            "Review the sequence definition and usage.\nA sequence may be altered to change the limits for generated values.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_CYCLE,
        symbol: "E_SEQUENCE_CYCLE",
        description: "Cycle failed for sequence «name»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_INVALID_NAME,
        symbol: "E_SEQUENCE_INVALID_NAME",
        description: "Invalid sequence name «name»",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_READ_ONLY_REQ,
        symbol: "E_SEQUENCE_READ_ONLY_REQ",
        description: "Sequences cannot be used in read-only requests",
        reasons: &[
            "A read-only request attempted to use a sequence.\nUse of a sequence updates meta-data contravening the read-only request specification.",
        ],
        actions: &["Avoid sequences in read-only requests."],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: W_SEQUENCE_CACHE_SIZE,
        symbol: "W_SEQUENCE_CACHE_SIZE",
        description: "Cache size «size» below recommended minimum",
        reasons: &[
            "A sequence cache value below the recommended minimum size was specified.\nSequences with smaller caches result in higher I/O and may suffer with increased latency as a result.",
        ],
        actions: &[
            "Review your sequence requirements and adjust the cache size as required.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_SEQUENCE_NAME_PARTS,
        symbol: "E_SEQUENCE_NAME_PARTS",
        description: "Sequence name resolves to «name» - check query_context?",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_SEQUENCE_DROP_ALL,
        symbol: "E_SEQUENCE_DROP_ALL",
        description: "Drop failed for sequences «sequences»",
        reasons: &[
            "The clean-up operation for sequences belonging to a scope that has been dropped encountered the noted error.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: W_SEQUENCE_NO_PREV_VALUE,
        symbol: "W_SEQUENCE_NO_PREV_VALUE",
        description: "Sequence previous value cannot be accessed before next value generation.",
        reasons: &[
            "A statement attempted to access the previous sequence value before the first value has been generated for it on the Query service node.",
        ],
        actions: &[
            "Review your logic and if necessary ensure that sequences generate values before attempting to access the previous value.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: true,
    },
    EntrySeed {
        code: E_NL_CREATE_SESSIONS_REQ,
        symbol: "E_NL_CREATE_SESSIONS_REQ",
        description: "Failed to create a new request to «sessions url»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SEND_SESSIONS_REQ,
        symbol: "E_NL_SEND_SESSIONS_REQ",
        description: "Failed to send the request to «sessions api» to get JWT",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SESSIONS_AUTH,
        symbol: "E_NL_SESSIONS_AUTH",
        description: "Authorization failed when establishing natural language session",
        reasons: &[],
        actions: &[
            "Verify the natural language processing credentials supplied in the request.",
            "Create a Couchbase cloud account if necessary.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SESSIONS_RESP_READ,
        symbol: "E_NL_SESSIONS_RESP_READ",
        description: "Error reading the response from «sessions api»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SESSIONS_RESP_UNMARSHAL,
        symbol: "E_NL_SESSIONS_RESP_UNMARSHAL",
        description: "Unmarshalling response from «sessions api» failed: ",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SESSIONS_PARSE_EXPIRE_TIME,
        symbol: "E_NL_SESSIONS_PARSE_EXPIRE_TIME",
        description: "Error parsing \"expiresAt\": «expiresAt»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_PROMPT_SCHEMA_MARSHAL,
        symbol: "E_NL_PROMPT_SCHEMA_MARSHAL",
        description: "Error marshalling schema information for prompt:",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CHATCOMPLETIONS_PROMPT_MARSHAL,
        symbol: "E_NL_CHATCOMPLETIONS_PROMPT_MARSHAL",
        description: "Error marshalling prompt for chat completions API request",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_SEND_CHATCOMPLETIONS_REQ,
        symbol: "E_NL_SEND_CHATCOMPLETIONS_REQ",
        description: "Couldn't send chat completions request to «chat completions api»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CHATCOMPLETIONS_REQ_FAILED,
        symbol: "E_NL_CHATCOMPLETIONS_REQ_FAILED",
        description: "Chat completions request failed with status «http-status-code»",
        reasons: &[
            "Status 429: Rate limited. The natural language processing facilities are limiting the number of requests.",
            "Status 404: Unauthorized. Authorization for natural language processing failed.",
        ],
        actions: &[
            "Status 429: Retry later.",
            "Status 404: Verify the credentials provided for natural language processing.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CHATCOMPLETIONS_READ_RESP_STREAM,
        symbol: "E_NL_CHATCOMPLETIONS_READ_RESP_STREAM",
        description: "Error reading response stream from chat completion API «url»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CHATCOMPLETIONS_RESP_UNMARSHAL,
        symbol: "E_NL_CHATCOMPLETIONS_RESP_UNMARSHAL",
        description: "Error unmarshalling chat completions response",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_ERR_CHATCOMPLETIONS_RESP,
        symbol: "E_NL_ERR_CHATCOMPLETIONS_RESP",
        description: "LLM processing failed",
        reasons: &[
            "\"natural\" parameter is not a valid prompt or doesn't prompt for a SELECT query.",
            "The natural language statement is not a valid prompt or doesn't prompt for a SELECT query.",
        ],
        actions: &[
            "Review the embedded \"reason\" field for more information on the failure.",
            "Try rewording your request or revising the keyspace information provided.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_NL_MISSING_NL_PARAM,
        symbol: "E_NL_MISSING_NL_PARAM",
        description: "Natural Language request expects «param» request parameter to be set",
        reasons: &[
            "\"natural_cred\", \"natural_context\" and \"natural_orgid\" parameters are required when sending a request using the \"natural\" parameter",
            "The options \"cred\", \"keyspaces\" and \"orgid\" are required in the statement when the \"natural_\" parameters are not supplied.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_FAIL_GENERATED_STMT,
        symbol: "E_NL_FAIL_GENERATED_STMT",
        description: "Statement generation failed: «failure»",
        reasons: &[
            "Syntax error in generated statement.",
            "LLM returned an empty response",
        ],
        actions: &[
            "Examine the «failure», adjust and re-submit as a direct statement execution request if possible.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CONTEXT,
        symbol: "E_NL_CONTEXT",
        description: "Error in keyspace list provided for natural language processing",
        reasons: &[
            "Validation of the \"natural_context\" parameter failed for the reason specified.",
            "Validation of the \"keyspaces\" option failed for the reason specified.",
        ],
        actions: &[
            "Revise the \"natural_context\" parameter.",
            "Revise the \"keyspaces\" option.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_PROMPT_INFER,
        symbol: "E_NL_PROMPT_INFER",
        description: "Schema inferring failed for keyspace «keyspace»",
        reasons: &[
            "A keyspace the list of keyspaces passed for natural language processing doesn't exist in the cluster.",
        ],
        actions: &[
            "Ensure all keyspaces provided for natural language processing exist.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_ORG_NOT_FOUND,
        symbol: "E_NL_ORG_NOT_FOUND",
        description: "Organization «organization» not found",
        reasons: &[
            "The organisation specified in the \"natural_orgid\" parameter was not found by the chat completions API.",
            "The organisation specified in the \"orgid\" option was not found by the chat completions API.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_NL_ORG_UNAUTH,
        symbol: "E_NL_ORG_UNAUTH",
        description: "Access to organisation «organization» is not authorized or collison in JWT refresh with an external client",
        reasons: &[
            "Organisation exists but the natural language processing credentials lack permission to access it.",
            "Concurrent JWT refresh by external clients.",
        ],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::Maybe,
        warning: false,
    },
    EntrySeed {
        code: E_NL_CREATE_CHATCOMPLETIONS_REQ,
        symbol: "E_NL_CREATE_CHATCOMPLETIONS_REQ",
        description: "Failed to create a new request to «chat completions api»",
        reasons: &[],
        actions: &[],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_TOO_MANY_WAITERS,
        symbol: "E_NL_TOO_MANY_WAITERS",
        description: "Too many waiters, dropping the request",
        reasons: &[
            "Natural language requests are throttled as there are no more free slots in the waiting queue",
        ],
        actions: &["Retry the request later."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_TIMEOUT,
        symbol: "E_NL_TIMEOUT",
        description: "Timed out waiting to be processed.",
        reasons: &["Natural language request timed out waiting to be processed"],
        actions: &["Retry the request later."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_REQ_FEAT_DISABLED,
        symbol: "E_NL_REQ_FEAT_DISABLED",
        description: "Natural language request processing is disabled.",
        reasons: &[
            "The processing of natural language requests has been disabled.",
        ],
        actions: &[
            "Enable natural language request processing before submitting a natural language request.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_NL_TOO_MANY_KEYSPACES,
        symbol: "E_NL_TOO_MANY_KEYSPACES",
        description: "Too many keyspaces specified.",
        reasons: &[
            "The \"natural_context\" parameter specifies more than the maximum permitted number of keyspaces.",
            "The \"keyspaces\" option specifies more than the maximum permitted number of keyspaces.",
        ],
        actions: &[
            "Revise the \"natural_context\" parameter or \"keyspaces\" option.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_NOT_SUPPORTED,
        symbol: "E_AUS_NOT_SUPPORTED",
        description: "Auto Update Statistics is not supported in Community Edition. It is an enterprise level feature.",
        reasons: &[
            "An Auto Update Statistics related operation was attempted on a Community Edition Couchbase cluster.",
        ],
        actions: &[
            "Consult the documentation for the feature you are trying to use.",
        ],
        applies_to: &[COMMUNITY_EDITION],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_NOT_INITIALIZED,
        symbol: "E_AUS_NOT_INITIALIZED",
        description: "Auto Update Statistics is not initialized for the node. It is only available on clusters migrated to a supported version.",
        reasons: &[
            "An Auto Update Statistics related operation was attempted on a cluster that is not fully migrated to a version that supports it.",
        ],
        actions: &[
            "Migrate the Couchbase cluster to a version that supports Auto Update Statistics.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_STORAGE,
        symbol: "E_AUS_STORAGE",
        description: "Error accessing Auto Update Statistics information from storage.",
        reasons: &[],
        actions: &["Retry the operation again. Or contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_INVALID_DOCUMENT_SCHEMA,
        symbol: "E_AUS_INVALID_DOCUMENT_SCHEMA",
        description: "Invalid schema detected in the Auto Update Statistics settings document.",
        reasons: &[
            "The schema validation check failed when an attempt was made to INSERT/UPSERT/UPDATE a document in system:aus or system:aus_settings.",
        ],
        actions: &[
            "Consult the documentation on the valid schema for Auto Update Statistics settings documents.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_SETTINGS_ENCODING,
        symbol: "E_AUS_SETTINGS_ENCODING",
        description: "Error «action» Automatic Update Statistics settings document.",
        reasons: &[],
        actions: &["Retry the operation again. Or contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_STORAGE_INVALID_KEY,
        symbol: "E_AUS_STORAGE_INVALID_KEY",
        description: "Invalid document key «key» for Auto Update Statistics settings document.",
        reasons: &[
            "An invalid document key was detected when an operation or SQL++ statement was run against system:aus or system:aus_settings.",
        ],
        actions: &[
            "Consult the documentation on the valid document key format for Auto Update Statistics settings documents.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::Yes,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_SCHEDULING,
        symbol: "E_AUS_SCHEDULING",
        description: "Error during scheduling the Auto Update Statistics task.",
        reasons: &[
            "An error occurred during scheduling the Auto Update Statistics task.",
        ],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_TASK,
        symbol: "E_AUS_TASK",
        description: "Error during «operation» of Auto Update Statistics task.",
        reasons: &[],
        actions: &["Contact support."],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_EVALUATION_PHASE,
        symbol: "E_AUS_EVALUATION_PHASE",
        description: "Auto Update Statistics task's Evaluation phase for «keyspace» encountered an error.",
        reasons: &[],
        actions: &[
            "Observe if the error occurs again in future runs of the Auto Update Statistics task. If it occurs frequently, contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_UPDATE_PHASE,
        symbol: "E_AUS_UPDATE_PHASE",
        description: "Auto Update Statistics task's Update phase for «keyspace» encountered an error.",
        reasons: &[],
        actions: &[
            "Observe if the error occurs again in future runs of the Auto Update Statistics task. If it occurs frequently, contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_TASK_NOT_STARTED,
        symbol: "E_AUS_TASK_NOT_STARTED",
        description: "The Auto Update Statistics task was not started due to existing load on the node.",
        reasons: &[
            "The Auto Update Statistics task was not started as the load factor of the Query node was too high to handle the additional workload of the task.",
        ],
        actions: &[
            "Observe if the error occurs again in future runs of the Auto Update Statistics task. If it occurs frequently, the set schedule for Auto Update Statistics might not be suitable for the workload.",
            "Approach revising the schedule. ",
            "Contact support.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
    EntrySeed {
        code: E_AUS_TASK_TIMEOUT,
        symbol: "E_AUS_TASK_TIMEOUT",
        description: "Scheduled window of the Auto Update Statistics task exceeded.",
        reasons: &[],
        actions: &[
            "Observe if the error occurs again in future runs of the Auto Update Statistics task. If it occurs frequently, the set scheduled window for Auto Update Statistics might not be long enough. Approach revising the start and end time of the schedule.",
        ],
        applies_to: &[SERVER],
        user: UserClassification::No,
        warning: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_sorted_and_unique() {
        for pair in STANDARD_ENTRIES.windows(2) {
            assert!(pair[0].code < pair[1].code, "{} out of order", pair[1].symbol);
        }
    }

    #[test]
    fn seed_symbols_match_registry() {
        for seed in STANDARD_ENTRIES {
            let registered = ALL_CODES
                .iter()
                .flat_map(|group| group.iter())
                .find(|(_, code)| *code == seed.code);
            assert_eq!(registered.map(|(name, _)| *name), Some(seed.symbol));
        }
    }

    #[test]
    fn every_declared_code_is_documented() {
        let declared: usize = ALL_CODES.iter().map(|group| group.len()).sum();
        assert_eq!(STANDARD_ENTRIES.len(), declared);
    }
}
