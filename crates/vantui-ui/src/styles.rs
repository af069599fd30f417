//! Component CSS.
//!
//! Inject once near the root of the app:
//!
//! ```rust,ignore
//! rsx! { style { {vantui_ui::STYLES} } }
//! ```

pub const STYLES: &str = r#"
/* === Circle === */
.vt-circle {
  position: relative;
  display: inline-block;
  width: 100px;
  height: 100px;
  text-align: center;
}

.vt-circle svg {
  position: absolute;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
}

.vt-circle__layer {
  stroke: #fff;
}

.vt-circle__hover {
  fill: none;
}

.vt-circle__text {
  position: absolute;
  top: 50%;
  left: 0;
  width: 100%;
  padding: 0 4px;
  box-sizing: border-box;
  transform: translateY(-50%);
  color: #323233;
  font-weight: 500;
  font-size: 14px;
  line-height: 20px;
}

/* === Overlay === */
.vt-overlay {
  position: fixed;
  inset: 0;
  z-index: 2000;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.7);
  animation: vt-fade-in 300ms ease-out both;
}

.vt-overlay--leave {
  animation: vt-fade-out 300ms ease-in both;
}

/* === Dialog === */
.vt-dialog {
  position: relative;
  max-width: 90%;
  overflow: hidden;
  font-size: 16px;
  background: #fff;
  border-radius: 16px;
}

.vt-dialog__close {
  position: absolute;
  top: 12px;
  right: 12px;
}

.vt-dialog__header-image {
  display: block;
  width: 100%;
}

.vt-dialog__header {
  padding-top: 26px;
  font-weight: 500;
  line-height: 24px;
  text-align: center;
}

.vt-dialog__content {
  max-height: 60vh;
  overflow-y: auto;
}

.vt-dialog__message {
  padding: 8px 24px 26px;
  font-size: 14px;
  line-height: 20px;
  white-space: pre-wrap;
  text-align: center;
  word-wrap: break-word;
}

.vt-dialog__message--no-title {
  padding-top: 26px;
  color: #323233;
}

.vt-dialog__message--left {
  text-align: left;
}

.vt-dialog__message--right {
  text-align: right;
}

.vt-dialog__footer {
  display: flex;
  overflow: hidden;
  border-top: 1px solid #ebedf0;
  user-select: none;
}

.vt-dialog__footer .vt-button {
  flex: 1;
  height: 48px;
  margin: 0;
  border: 0;
}

.vt-dialog__footer .vt-button + .vt-button {
  border-left: 1px solid #ebedf0;
}

.vt-dialog__footer--round {
  padding: 8px 24px 16px;
  border-top: 0;
}

.vt-dialog__footer--round .vt-button {
  height: 36px;
}

.vt-dialog__footer--round .vt-button + .vt-button {
  margin-left: 8px;
  border-left: 0;
}

.vt-dialog--round-button .vt-dialog__message {
  padding-bottom: 16px;
}

.vt-dialog-bounce-enter {
  animation: vt-bounce-in 300ms ease-out both;
}

.vt-dialog-bounce-leave {
  animation: vt-bounce-out 300ms ease-in both;
}

/* === Button === */
.vt-button {
  position: relative;
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0 16px;
  font-size: 16px;
  background: #fff;
  color: #323233;
  border: 1px solid #ebedf0;
  cursor: pointer;
}

.vt-button--primary {
  color: #fff;
  background: #1989fa;
  border-color: #1989fa;
}

.vt-dialog__footer .vt-button--primary:not(.vt-button--round) {
  color: #1989fa;
  background: #fff;
}

.vt-button--danger {
  color: #fff;
  background: #ee0a24;
  border-color: #ee0a24;
}

.vt-button--round {
  border-radius: 999px;
}

.vt-button--disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.vt-button--loading {
  cursor: default;
}

.vt-button__loading {
  width: 20px;
  height: 20px;
  border: 2px solid currentColor;
  border-top-color: transparent;
  border-radius: 50%;
  animation: vt-rotate 800ms linear infinite;
}

.vt-close {
  padding: 0;
  font-size: 22px;
  line-height: 1;
  color: #c8c9cc;
  background: none;
  border: 0;
  cursor: pointer;
}

.vt-close:hover {
  color: #969799;
}

/* === Keyframes === */
@keyframes vt-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes vt-fade-out {
  from { opacity: 1; }
  to { opacity: 0; }
}

@keyframes vt-bounce-in {
  from { opacity: 0; transform: scale(0.7); }
  to { opacity: 1; transform: scale(1); }
}

@keyframes vt-bounce-out {
  from { opacity: 1; transform: scale(1); }
  to { opacity: 0; transform: scale(0.9); }
}

@keyframes vt-rotate {
  from { transform: rotate(0deg); }
  to { transform: rotate(360deg); }
}
"#;
