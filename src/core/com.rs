use crate::error::{AutomationError, Result};
use windows::core::{GUID, HSTRING, PCWSTR};
use windows::Win32::System::Com::{
    CLSIDFromProgID, CoCreateInstance, CoInitializeEx, IDispatch, CLSCTX_LOCAL_SERVER,
    COINIT_APARTMENTTHREADED, DISPATCH_METHOD, DISPPARAMS,
};
use windows::Win32::System::Variant::VARIANT;

const LOCALE_USER_DEFAULT: u32 = 0x0400;

/// Late-bound client for the HEC-RAS controller (`RAS631.HECRASController` and friends).
pub struct RasController {
    dispatch: IDispatch,
}

impl RasController {
    /// Create the controller object on the calling thread's apartment.
    pub fn connect(prog_id: &str) -> Result<Self> {
        unsafe {
            // Already-initialized apartments return S_FALSE; either way COM is usable.
            let _ = CoInitializeEx(None, COINIT_APARTMENTTHREADED);

            let clsid = CLSIDFromProgID(&HSTRING::from(prog_id))
                .map_err(|e| AutomationError::Com(format!("Unknown ProgID {}: {}", prog_id, e)))?;
            let dispatch: IDispatch = CoCreateInstance(&clsid, None, CLSCTX_LOCAL_SERVER)
                .map_err(|e| AutomationError::Com(format!("Failed to start {}: {}", prog_id, e)))?;

            tracing::info!("Connected to {}", prog_id);
            Ok(Self { dispatch })
        }
    }

    pub fn show(&self) -> Result<()> {
        self.call("ShowRas")
    }

    /// Invoke an argument-less method by name.
    fn call(&self, method: &str) -> Result<()> {
        unsafe {
            let name = HSTRING::from(method);
            let names = [PCWSTR(name.as_ptr())];
            let mut dispid = 0i32;
            self.dispatch
                .GetIDsOfNames(&GUID::zeroed(), names.as_ptr(), 1, LOCALE_USER_DEFAULT, &mut dispid)
                .map_err(|e| AutomationError::Com(format!("{} not found: {}", method, e)))?;

            let params = DISPPARAMS::default();
            let mut result = VARIANT::default();
            self.dispatch
                .Invoke(
                    dispid,
                    &GUID::zeroed(),
                    LOCALE_USER_DEFAULT,
                    DISPATCH_METHOD,
                    &params,
                    Some(&mut result),
                    None,
                    None,
                )
                .map_err(|e| AutomationError::Com(format!("{} failed: {}", method, e)))
        }
    }
}
